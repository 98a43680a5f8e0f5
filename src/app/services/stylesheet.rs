use crate::app::domain::selectors::TOGGLE_CLASS;
use crate::app::domain::{Configuration, PageSelectors};

/// Background of the placeholder drawn where a profile picture used to be
const AVATAR_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

const TOGGLE_COLOR: &str = "#25d366";
const TOGGLE_HOVER_COLOR: &str = "#1fa851";

/// Build the stylesheet injected after every page load.
///
/// Avatar, read receipt and timestamp sections depend on the configuration;
/// tab hiding, typing indicator hiding and the toggle styling are always present.
pub fn derive_stylesheet(config: &Configuration, selectors: &PageSelectors) -> String {
    let mut css = String::new();

    push_section(&mut css, "Hide Status tab", &hide_rule(&[selectors.status_tab]));
    push_section(
        &mut css,
        "Hide Communities/Channels",
        &hide_rule(&[selectors.communities_tab]),
    );

    if !config.show_profile_pics {
        push_section(&mut css, "Hide profile pictures", &avatar_rules(selectors));
    }

    push_section(
        &mut css,
        "Hide typing indicators",
        &hide_rule(&[selectors.typing_indicator]),
    );

    if !config.show_read_receipts {
        push_section(
            &mut css,
            "Hide read receipts",
            &hide_rule(&[selectors.read_receipt_double, selectors.read_receipt_single]),
        );
    }

    if !config.show_timestamps {
        push_section(&mut css, "Hide timestamps", &hide_rule(&[selectors.message_meta]));
    }

    push_section(&mut css, "Focus mode toggle button", &toggle_rules());
    push_section(&mut css, "Clean header", "header { box-shadow: none !important; }\n");

    css
}

fn push_section(css: &mut String, title: &str, body: &str) {
    css.push_str("/* ");
    css.push_str(title);
    css.push_str(" */\n");
    css.push_str(body);
    css.push('\n');
}

fn hide_rule(targets: &[&str]) -> String {
    format!("{} {{ display: none !important; }}\n", targets.join(",\n"))
}

fn avatar_rules(selectors: &PageSelectors) -> String {
    let images = [
        format!("{} img", selectors.chat_row),
        format!("{} img", selectors.avatar),
        format!("{} img", selectors.legacy_avatar),
    ];
    let containers = [
        format!("{} {}", selectors.chat_row, selectors.avatar),
        selectors.avatar.to_string(),
        selectors.legacy_avatar.to_string(),
    ];

    let mut rules = format!("{} {{ display: none !important; }}\n\n", images.join(",\n"));
    rules.push_str(&format!(
        "{} {{\n  \
           background: {AVATAR_GRADIENT};\n  \
           border-radius: 50%;\n  \
           display: flex !important;\n  \
           align-items: center;\n  \
           justify-content: center;\n  \
           color: white;\n  \
           font-weight: bold;\n  \
           font-size: 14px;\n\
         }}\n",
        containers.join(",\n")
    ));
    rules
}

fn toggle_rules() -> String {
    format!(
        ".{TOGGLE_CLASS} {{\n  \
           position: fixed;\n  \
           top: 20px;\n  \
           right: 20px;\n  \
           z-index: 9999;\n  \
           background: {TOGGLE_COLOR};\n  \
           color: white;\n  \
           border: none;\n  \
           border-radius: 50%;\n  \
           width: 50px;\n  \
           height: 50px;\n  \
           cursor: pointer;\n  \
           box-shadow: 0 2px 10px rgba(0,0,0,0.2);\n  \
           font-size: 18px;\n\
         }}\n\n\
         .{TOGGLE_CLASS}:hover {{\n  \
           background: {TOGGLE_HOVER_COLOR};\n\
         }}\n"
    )
}
