//! HTML rendering of the chat-bubble preview.
//!
//! Produces plain markup strings; no scripts, no event handlers. Putting the
//! markup in front of the user is the display port's job.

use crate::preview::PreviewModel;

/// Bot display name shown in the preview header.
pub const BOT_NAME: &str = "Бот Запуск речи. Каждый день задание";
/// Bot handle shown under the name.
pub const BOT_HANDLE: &str = "@SpeechStartBot";
/// Icon shown next to the bot name.
pub const BOT_ICON: &str = "🤖";
/// Captions of the non-interactive action buttons under the message.
/// The first one renders highlighted.
pub const ACTION_BUTTONS: [&str; 4] = [
    "✅ Выполнено",
    "📚 Еще задание",
    "👶 Изменить возраст",
    "ℹ️ О боте",
];

/// Escape text for interpolation into element bodies and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the chat-bubble fragment for a preview model.
///
/// Pure: identical models yield byte-identical markup. `body_html` is taken
/// as-is (the model builder already escaped it); everything else is escaped
/// here.
pub fn render_preview(model: &PreviewModel) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"telegram-preview\">\n");

    // Header: icon, bot name, handle
    out.push_str("  <div class=\"telegram-header\">\n");
    out.push_str(&format!("    <div class=\"bot-icon\">{}</div>\n", BOT_ICON));
    out.push_str("    <div>\n");
    out.push_str(&format!("      <div>{}</div>\n", BOT_NAME));
    out.push_str(&format!(
        "      <div class=\"bot-handle\">{}</div>\n",
        BOT_HANDLE
    ));
    out.push_str("    </div>\n");
    out.push_str("  </div>\n");

    out.push_str("  <div class=\"telegram-message\">\n");

    if let Some(src) = &model.image_ref {
        out.push_str(&format!(
            "    <img src=\"{}\" class=\"telegram-image\" alt=\"Изображение задания\">\n",
            escape_html(src)
        ));
    }

    out.push_str("    <div class=\"telegram-badge-row\">\n");
    out.push_str(&format!(
        "      <span class=\"telegram-badge\">{}</span>\n",
        escape_html(&model.age_group_label)
    ));
    out.push_str("    </div>\n");

    out.push_str(&format!(
        "    <div class=\"telegram-title\"><strong>{}</strong></div>\n",
        escape_html(&model.title)
    ));
    out.push_str(&format!(
        "    <div class=\"telegram-body\">{}</div>\n",
        model.body_html
    ));

    out.push_str("    <div class=\"telegram-buttons\">\n");
    for (i, caption) in ACTION_BUTTONS.iter().enumerate() {
        let class = if i == 0 {
            "telegram-button primary"
        } else {
            "telegram-button"
        };
        out.push_str(&format!(
            "      <div class=\"{}\">{}</div>\n",
            class, caption
        ));
    }
    out.push_str("    </div>\n");

    out.push_str(&format!(
        "    <div class=\"telegram-time\">{}</div>\n",
        model.timestamp
    ));
    out.push_str("  </div>\n");
    out.push_str("</div>\n");

    out
}

/// Stylesheet for the standalone page. Covers every class the fragment
/// emits, plus the modal chrome around it.
const PREVIEW_STYLES: &str = "body{margin:0;min-height:100vh;background:#0e1621;color:#f5f5f5;font-family:-apple-system,'Segoe UI',Roboto,sans-serif;}\
.modal-backdrop{min-height:100vh;display:flex;align-items:center;justify-content:center;background:rgba(0,0,0,0.5);}\
.modal-card{background:#17212b;border-radius:12px;padding:20px;max-width:420px;width:100%;box-shadow:0 8px 32px rgba(0,0,0,0.4);}\
.modal-title{font-size:14px;opacity:0.7;margin-bottom:12px;}\
.telegram-preview{background:#0e1621;border-radius:8px;padding:12px;}\
.telegram-header{display:flex;align-items:center;gap:10px;margin-bottom:10px;}\
.bot-icon{font-size:24px;}\
.bot-handle{font-size:12px;opacity:0.7;}\
.telegram-message{background:#182533;border-radius:8px;padding:10px 12px;}\
.telegram-image{max-width:100%;border-radius:6px;margin-bottom:8px;}\
.telegram-badge-row{margin-bottom:8px;}\
.telegram-badge{background:rgba(74,158,255,0.2);padding:2px 8px;border-radius:12px;font-size:11px;color:#4a9eff;}\
.telegram-title{margin-bottom:12px;}\
.telegram-body{font-size:14px;line-height:1.5;}\
.telegram-buttons{display:flex;flex-wrap:wrap;gap:6px;margin-top:12px;}\
.telegram-button{background:#2b5278;border-radius:6px;padding:6px 10px;font-size:13px;text-align:center;flex:1 1 45%;}\
.telegram-button.primary{background:#4a9eff;}\
.telegram-time{text-align:right;font-size:11px;opacity:0.6;margin-top:8px;}";

/// Wrap a rendered fragment in a standalone modal-styled page.
///
/// The fragment lands inside the container with the given id, mirroring how
/// the admin panel injects the preview into its dialog.
pub fn render_page(container: &str, fragment: &str) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<title>Предпросмотр Telegram</title>\n");
    out.push_str(&format!("<style>{}</style>\n", PREVIEW_STYLES));
    out.push_str("</head>\n<body>\n");
    out.push_str("<div class=\"modal-backdrop\">\n");
    out.push_str("<div class=\"modal-card\">\n");
    out.push_str("<div class=\"modal-title\">Предпросмотр сообщения</div>\n");
    out.push_str(&format!("<div id=\"{}\">\n", escape_html(container)));
    out.push_str(fragment);
    out.push_str("</div>\n</div>\n</div>\n</body>\n</html>\n");

    out
}
