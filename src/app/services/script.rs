use serde::Serialize;

use crate::app::domain::selectors::{PROCESSED_CLASS, TOGGLE_CLASS};
use crate::app::domain::{Configuration, PageSelectors, ReplacementType};
use crate::app::infrastructure::error::Result;

/// Fallback rescan period when the page has no `MutationObserver`
pub const SCAN_INTERVAL_MS: u64 = 1000;

/// Delay before the first scan, to let the chat list render
pub const INITIAL_SCAN_DELAY_MS: u64 = 2000;

/// Placeholder drawn for every contact in `abstract` mode
pub const ABSTRACT_GLYPH: &str = "◉";

/// Placeholder used in `initials` mode when no contact name can be found
pub const UNKNOWN_INITIALS: &str = "?";

pub const FOCUS_ON_ICON: &str = "🎯";
pub const FOCUS_OFF_ICON: &str = "👁️";

/// Name of the window property holding the per-document install state
pub const INSTALL_KEY: &str = "__focusChat";

/// Body of the injected script. Called with a single JSON `options` argument.
///
/// Every DOM lookup may come back empty; missing elements are skipped.
const CUSTOMIZE_SCRIPT: &str = r#"function (options) {
    'use strict';
    var sel = options.selectors;

    function setTabsVisible(visible) {
        [sel.statusTab, sel.communitiesTab].forEach(function (selector) {
            var tab = document.querySelector(selector);
            if (tab) {
                tab.style.setProperty('display', visible ? 'flex' : 'none', 'important');
            }
        });
    }

    function installToggle() {
        if (!document.body || document.querySelector('.' + options.toggleClass)) {
            return;
        }

        var focusModeEnabled = options.focusMode;
        var button = document.createElement('button');
        button.className = options.toggleClass;
        button.title = 'Toggle Focus Mode';
        button.textContent = focusModeEnabled ? options.icons.focusOn : options.icons.focusOff;

        button.addEventListener('click', function () {
            focusModeEnabled = !focusModeEnabled;
            button.textContent = focusModeEnabled ? options.icons.focusOn : options.icons.focusOff;
            setTabsVisible(!focusModeEnabled);
        });

        document.body.appendChild(button);
        if (!focusModeEnabled) {
            setTabsVisible(true);
        }
    }

    function contactName(avatar) {
        var row = avatar.closest ? avatar.closest(sel.chatRow) : null;
        if (!row) {
            return null;
        }
        var title = row.querySelector(sel.contactTitle);
        return title && title.textContent ? title.textContent : null;
    }

    function initials(name) {
        if (name === null) {
            return options.unknownInitials;
        }
        var letters = name.trim().split(' ')
            .filter(function (word) { return word.length > 0; })
            .map(function (word) { return Array.from(word)[0]; })
            .slice(0, 2)
            .join('');
        return letters ? letters.toUpperCase() : options.unknownInitials;
    }

    function processAvatar(avatar) {
        avatar.classList.add(options.processedClass);
        if (options.showProfilePics) {
            return;
        }

        var img = avatar.querySelector('img');
        if (!img) {
            return;
        }
        img.style.display = 'none';

        if (options.replacementType === 'initials') {
            avatar.textContent = initials(contactName(avatar));
        } else if (options.replacementType === 'abstract') {
            avatar.textContent = options.abstractGlyph;
        }
    }

    function scan() {
        var pending = document.querySelectorAll(
            sel.avatar + ':not(.' + options.processedClass + ')'
        );
        Array.prototype.forEach.call(pending, processAvatar);
        installToggle();
    }

    var installed = window[options.installKey];
    if (installed) {
        installed.installToggle();
        return;
    }

    window[options.installKey] = {
        installToggle: installToggle,
        scan: scan,
        notify: function (title, body) {
            var host = window.focusChatHost;
            if (options.enableNotifications && host && typeof host.sendNotification === 'function') {
                host.sendNotification(String(title), String(body));
            }
        }
    };

    installToggle();
    setTimeout(scan, options.initialScanDelayMs);

    if (typeof MutationObserver === 'function' && document.body) {
        new MutationObserver(function (mutations) {
            for (var i = 0; i < mutations.length; i++) {
                if (mutations[i].addedNodes.length > 0) {
                    scan();
                    return;
                }
            }
        }).observe(document.body, { childList: true, subtree: true });
    } else {
        setInterval(scan, options.scanIntervalMs);
    }
}"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Icons {
    focus_on: &'static str,
    focus_off: &'static str,
}

/// Values handed to the injected script as its `options` argument.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOptions<'a> {
    focus_mode: bool,
    show_profile_pics: bool,
    enable_notifications: bool,
    replacement_type: ReplacementType,
    abstract_glyph: &'static str,
    unknown_initials: &'static str,
    toggle_class: &'static str,
    processed_class: &'static str,
    install_key: &'static str,
    icons: Icons,
    scan_interval_ms: u64,
    initial_scan_delay_ms: u64,
    selectors: &'a PageSelectors,
}

impl<'a> ScriptOptions<'a> {
    pub fn new(config: &Configuration, selectors: &'a PageSelectors) -> Self {
        Self {
            focus_mode: config.focus_mode,
            show_profile_pics: config.show_profile_pics,
            enable_notifications: config.enable_notifications,
            replacement_type: config.replacement_type,
            abstract_glyph: ABSTRACT_GLYPH,
            unknown_initials: UNKNOWN_INITIALS,
            toggle_class: TOGGLE_CLASS,
            processed_class: PROCESSED_CLASS,
            install_key: INSTALL_KEY,
            icons: Icons {
                focus_on: FOCUS_ON_ICON,
                focus_off: FOCUS_OFF_ICON,
            },
            scan_interval_ms: SCAN_INTERVAL_MS,
            initial_scan_delay_ms: INITIAL_SCAN_DELAY_MS,
            selectors,
        }
    }

    /// Options as a JSON object literal.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build the script injected after every page load.
///
/// The configuration travels as a JSON argument of the script function
/// rather than being spliced into its source.
pub fn derive_script(config: &Configuration, selectors: &PageSelectors) -> Result<String> {
    let options = ScriptOptions::new(config, selectors).to_json()?;
    Ok(format!("({CUSTOMIZE_SCRIPT})({options});\n"))
}
