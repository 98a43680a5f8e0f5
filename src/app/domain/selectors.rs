use serde::Serialize;

/// CSS selectors for the elements of the wrapped page that get customized.
///
/// The stylesheet and the script are both rendered from one instance, so a
/// selector change in the page only has to be followed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSelectors {
    /// Status tab in the side navigation
    pub status_tab: &'static str,
    /// Communities/Channels tab in the side navigation
    pub communities_tab: &'static str,
    /// One row of the chat list
    pub chat_row: &'static str,
    pub avatar: &'static str,
    /// Contact name inside a chat row
    pub contact_title: &'static str,
    pub read_receipt_double: &'static str,
    pub read_receipt_single: &'static str,
    /// Message metadata block (timestamp and receipts)
    pub message_meta: &'static str,
    pub typing_indicator: &'static str,
    /// Legacy avatar container class used by older page builds
    pub legacy_avatar: &'static str,
}

impl PageSelectors {
    /// Selectors for WhatsApp Web.
    pub const fn whatsapp() -> Self {
        Self {
            status_tab: r#"[data-tab="3"]"#,
            communities_tab: r#"[data-tab="4"]"#,
            chat_row: r#"[data-testid="cell-frame-container"]"#,
            avatar: r#"[data-testid="avatar"]"#,
            contact_title: r#"[data-testid="cell-frame-title"]"#,
            read_receipt_double: r#"[data-testid="msg-dblcheck"]"#,
            read_receipt_single: r#"[data-testid="msg-check"]"#,
            message_meta: r#"[data-testid="msg-meta"]"#,
            typing_indicator: r#"[data-testid="typing-indicator"]"#,
            legacy_avatar: ".chat-avatar",
        }
    }
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self::whatsapp()
    }
}

/// Class name of the floating focus toggle button
pub const TOGGLE_CLASS: &str = "focus-toggle";

/// Class added to an avatar once the scan has handled it
pub const PROCESSED_CLASS: &str = "focuschat-processed";
