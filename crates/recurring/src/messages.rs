//! Audit messages posted when a recurring order is generated from a sale line.

use fieldservice_core::i18n::render;
use fieldservice_core::{escape_html, Message, RecordRef, Translator};

/// Posted on the sales order.
pub const ORDER_CREATED: &str = "Field Service recurring Created ({product}): {recurring}";

/// Posted on the new recurring order.
pub const RECURRING_CREATED_FROM: &str = "This recurring has been created from: {order} ({product})";

/// Message for the sales order, linking to the recurring order.
pub fn order_created(
    translator: &dyn Translator,
    lang: &str,
    order: RecordRef,
    recurring: RecordRef,
    product_name: &str,
) -> Message {
    let template = translator.translate(lang, ORDER_CREATED);
    let product = escape_html(product_name);
    let link = recurring.to_html_link();
    let body = render(
        &template,
        &[("product", product.as_ref()), ("recurring", link.as_str())],
    );
    Message::new(order, body, vec![recurring])
}

/// Message for the recurring order, linking back to the sales order.
pub fn recurring_created_from(
    translator: &dyn Translator,
    lang: &str,
    recurring: RecordRef,
    order: RecordRef,
    product_name: &str,
) -> Message {
    let template = translator.translate(lang, RECURRING_CREATED_FROM);
    let product = escape_html(product_name);
    let link = order.to_html_link();
    let body = render(
        &template,
        &[("order", link.as_str()), ("product", product.as_ref())],
    );
    Message::new(recurring, body, vec![order])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    use fieldservice_core::{RecordId, Untranslated};

    fn refs() -> (RecordRef, RecordRef) {
        (
            RecordRef::new("sale.order", *RecordId::new().as_uuid(), "S00042"),
            RecordRef::new("fsm.recurring", *RecordId::new().as_uuid(), "RO00007"),
        )
    }

    struct French;

    impl Translator for French {
        fn translate<'a>(&'a self, lang: &str, source: &'a str) -> Cow<'a, str> {
            match (lang, source) {
                ("fr_FR", ORDER_CREATED) => {
                    Cow::Borrowed("Intervention récurrente créée ({product}) : {recurring}")
                }
                _ => Cow::Borrowed(source),
            }
        }
    }

    #[test]
    fn order_message_names_product_and_links_recurring() {
        let (order, recurring) = refs();
        let msg = order_created(&Untranslated, "en_US", order.clone(), recurring.clone(), "Lawn care");

        assert_eq!(msg.target, order);
        assert!(msg.body.starts_with("Field Service recurring Created (Lawn care): <a "));
        assert!(msg.body.contains(">RO00007</a>"));
        assert!(msg.references("fsm.recurring", &recurring.id));
        assert_eq!(msg.links.len(), 1);
    }

    #[test]
    fn recurring_message_links_order_and_names_product() {
        let (order, recurring) = refs();
        let msg = recurring_created_from(&Untranslated, "en_US", recurring.clone(), order.clone(), "Lawn care");

        assert_eq!(msg.target, recurring);
        assert!(msg.body.starts_with("This recurring has been created from: <a "));
        assert!(msg.body.ends_with(">S00042</a> (Lawn care)"));
        assert!(msg.references("sale.order", &order.id));
    }

    #[test]
    fn template_is_translated_before_substitution() {
        let (order, recurring) = refs();
        let msg = order_created(&French, "fr_FR", order, recurring, "Lawn care");
        assert!(msg.body.starts_with("Intervention récurrente créée (Lawn care) : <a "));
        assert!(msg.body.contains(">RO00007</a>"));
    }

    #[test]
    fn product_name_is_escaped() {
        let (order, recurring) = refs();
        let msg = order_created(&Untranslated, "en_US", order, recurring, "Hedges & <trees>");
        assert!(msg.body.contains("(Hedges &amp; &lt;trees&gt;)"));
    }
}
