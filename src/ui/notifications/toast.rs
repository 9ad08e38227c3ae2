// SPDX-License-Identifier: MPL-2.0
//! Toast element construction.
//!
//! Toasts are the visual representation of notifications: a small card with
//! a kind icon, the message, and a close button. The message is always added
//! as a text node.

use super::notification::{Kind, ToastId};
use crate::application::port::{NodeId, Surface};
use crate::i18n::fluent::I18n;

/// Class shared by every toast element.
pub const TOAST_CLASS: &str = "toast";
/// Class added when a toast starts its exit animation.
pub const HIDING_CLASS: &str = "hiding";
/// Class of the container hosting all toasts.
pub const CONTAINER_CLASS: &str = "toast-container";
pub const ICON_CLASS: &str = "toast-icon";
pub const CONTENT_CLASS: &str = "toast-content";
pub const MESSAGE_CLASS: &str = "toast-message";
pub const CLOSE_CLASS: &str = "toast-close";
/// Attribute on the close button naming the toast it dismisses.
pub const DISMISS_ATTRIBUTE: &str = "data-dismiss";

const CLOSE_GLYPH: &str = "×";

/// Localized strings rendered around the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastLabels {
    close: String,
    success: String,
    error: String,
    info: String,
    warning: String,
}

impl Default for ToastLabels {
    fn default() -> Self {
        Self {
            close: "Close".to_string(),
            success: "Success".to_string(),
            error: "Error".to_string(),
            info: "Information".to_string(),
            warning: "Warning".to_string(),
        }
    }
}

impl ToastLabels {
    /// Resolves every label in the current locale of `i18n`.
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            close: i18n.tr("toast-close"),
            success: i18n.tr(Kind::Success.label_key()),
            error: i18n.tr(Kind::Error.label_key()),
            info: i18n.tr(Kind::Info.label_key()),
            warning: i18n.tr(Kind::Warning.label_key()),
        }
    }

    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    #[must_use]
    pub fn kind(&self, kind: Kind) -> &str {
        match kind {
            Kind::Success => &self.success,
            Kind::Error => &self.error,
            Kind::Info => &self.info,
            Kind::Warning => &self.warning,
        }
    }
}

/// Toast element builder.
pub struct Toast;

impl Toast {
    /// Builds a detached toast element and returns its root.
    ///
    /// ```text
    /// div#<id>.toast.toast-<kind>[role][aria-label]
    ///   span.toast-icon
    ///   div.toast-content > div.toast-message
    ///   button.toast-close[aria-label][data-dismiss=<id>]
    /// ```
    pub fn render<S: Surface>(
        surface: &mut S,
        id: &ToastId,
        kind: Kind,
        message: &str,
        labels: &ToastLabels,
    ) -> NodeId {
        let root = surface.create_element("div");
        surface.set_attribute(root, "id", id.as_str());
        surface.add_class(root, TOAST_CLASS);
        surface.add_class(root, kind.class_name());
        surface.set_attribute(root, "role", kind.aria_role());
        surface.set_attribute(root, "aria-label", labels.kind(kind));

        let icon = surface.create_element("span");
        surface.add_class(icon, ICON_CLASS);
        surface.set_attribute(icon, "aria-hidden", "true");
        surface.append_text(icon, kind.icon());
        surface.append_child(root, icon);

        let content = surface.create_element("div");
        surface.add_class(content, CONTENT_CLASS);
        let text = surface.create_element("div");
        surface.add_class(text, MESSAGE_CLASS);
        surface.append_text(text, message);
        surface.append_child(content, text);
        surface.append_child(root, content);

        let close = surface.create_element("button");
        surface.add_class(close, CLOSE_CLASS);
        surface.set_attribute(close, "type", "button");
        surface.set_attribute(close, "aria-label", labels.close());
        surface.set_attribute(close, DISMISS_ATTRIBUTE, id.as_str());
        surface.append_text(close, CLOSE_GLYPH);
        surface.append_child(root, close);

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dom::Document;

    fn render(kind: Kind, message: &str) -> (Document, NodeId) {
        let mut document = Document::new();
        let id = ToastId::from("toast-1-abcdefghi");
        let root = Toast::render(&mut document, &id, kind, message, &ToastLabels::default());
        (document, root)
    }

    #[test]
    fn toast_carries_kind_class_and_id() {
        let (document, root) = render(Kind::Error, "Upload failed");

        assert_eq!(document.attribute(root, "id"), Some("toast-1-abcdefghi"));
        assert!(document.has_class(root, TOAST_CLASS));
        assert!(document.has_class(root, "toast-error"));
        assert_eq!(document.attribute(root, "role"), Some("alert"));
        assert_eq!(document.attribute(root, "aria-label"), Some("Error"));
    }

    #[test]
    fn message_is_plain_text() {
        let (document, root) = render(Kind::Info, "<b>bold</b> & more");
        let message = document
            .find_by_class(root, MESSAGE_CLASS)
            .expect("message element");

        assert_eq!(document.text_content(message), "<b>bold</b> & more");
        assert!(document.descendants(root).iter().all(|n| document.tag(*n) != Some("b")));
        assert!(document
            .outer_html(message)
            .contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
    }

    #[test]
    fn icon_matches_kind() {
        for kind in Kind::ALL {
            let (document, root) = render(kind, "x");
            let icon = document.find_by_class(root, ICON_CLASS).expect("icon element");
            assert_eq!(document.text_content(icon), kind.icon());
        }
    }

    #[test]
    fn close_button_names_its_toast() {
        let (document, root) = render(Kind::Success, "Saved");
        let close = document.find_by_class(root, CLOSE_CLASS).expect("close button");

        assert_eq!(document.tag(close), Some("button"));
        assert_eq!(
            document.attribute(close, DISMISS_ATTRIBUTE),
            Some("toast-1-abcdefghi")
        );
        assert_eq!(document.attribute(close, "aria-label"), Some("Close"));
    }

    #[test]
    fn labels_resolve_from_i18n() {
        let config = crate::config::Config::default();
        let i18n = I18n::new(Some("fr".to_string()), &config);
        let labels = ToastLabels::from_i18n(&i18n);

        assert_eq!(labels.close(), "Fermer");
        assert_eq!(labels.kind(Kind::Warning), "Avertissement");
    }
}
