//! Decoding of agent-supplied payload fields.
//!
//! The structured booking fields (`contactDetails`, `paymentInformation`)
//! reach the adapter as strings holding either JSON or a bare XML fragment
//! such as `<email>jane@example.com</email>`. A value containing `"</"`
//! takes the XML path and is wrapped in a synthetic root named after the
//! field before parsing; everything else must be JSON. There is no fallback
//! from one format to the other.

use serde_json::{Map, Number, Value};

use crate::models::error::AdapterError;

/// Decodes a structured field from either JSON or an XML fragment.
///
/// # Errors
///
/// Returns [`AdapterError::PayloadDecode`] when the chosen format does not
/// parse.
pub fn decode_structured_field(field: &str, raw: &str) -> Result<Value, AdapterError> {
    if raw.contains("</") {
        decode_xml_fragment(field, raw)
    } else {
        serde_json::from_str(raw)
            .map_err(|e| AdapterError::PayloadDecode(format!("{field} is not valid JSON: {e}")))
    }
}

fn decode_xml_fragment(field: &str, raw: &str) -> Result<Value, AdapterError> {
    let wrapped = format!("<{field}>{raw}</{field}>");
    let document = roxmltree::Document::parse(&wrapped)
        .map_err(|e| AdapterError::PayloadDecode(format!("{field} is not valid XML: {e}")))?;
    Ok(element_to_value(document.root_element()))
}

/// Child elements become object entries, leaf text becomes a scalar.
fn element_to_value(node: roxmltree::Node<'_, '_>) -> Value {
    let children: Vec<_> = node.children().filter(roxmltree::Node::is_element).collect();
    if children.is_empty() {
        return text_to_scalar(node.text().unwrap_or_default().trim());
    }
    let mut object = Map::new();
    for child in children {
        object.insert(child.tag_name().name().to_string(), element_to_value(child));
    }
    Value::Object(object)
}

/// Scalar coercion keeps the XML path in line with the JSON path, so
/// `<amount>100</amount>` and `{"amount":100}` decode to the same value.
fn text_to_scalar(text: &str) -> Value {
    if let Ok(int) = text.parse::<i64>() {
        return Value::Number(Number::from(int));
    }
    if let Ok(float) = text.parse::<f64>()
        && let Some(number) = Number::from_f64(float)
    {
        return Value::Number(number);
    }
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(text.to_string()),
    }
}

/// Coerces a string-typed event value to an integer.
///
/// # Errors
///
/// Returns [`AdapterError::InvalidParameter`] when the value does not parse
/// as an integer.
pub fn coerce_integer(field: &str, raw: &str) -> Result<i64, AdapterError> {
    raw.trim().parse::<i64>().map_err(|_| {
        AdapterError::InvalidParameter(format!("{field} must be an integer, got \"{raw}\""))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_and_xml_paths_produce_the_same_value() {
        let from_json = decode_structured_field("paymentInformation", r#"{"amount":100}"#).unwrap();
        let from_xml = decode_structured_field("paymentInformation", "<amount>100</amount>").unwrap();

        assert_eq!(from_json, json!({"amount": 100}));
        assert_eq!(from_json, from_xml);
    }

    #[test]
    fn xml_fragments_with_several_fields_become_objects() {
        let decoded = decode_structured_field(
            "contactDetails",
            "<email>jane@example.com</email><phone>12345</phone>",
        )
        .unwrap();

        assert_eq!(
            decoded,
            json!({"email": "jane@example.com", "phone": 12345})
        );
    }

    #[test]
    fn nested_xml_elements_nest_in_the_decoded_object() {
        let decoded = decode_structured_field(
            "paymentInformation",
            "<card><number>4111</number><valid>true</valid></card>",
        )
        .unwrap();

        assert_eq!(
            decoded,
            json!({"card": {"number": 4111, "valid": true}})
        );
    }

    #[test]
    fn values_without_a_closing_tag_take_the_json_path() {
        let err = decode_structured_field("contactDetails", "<oops>").unwrap_err();
        assert!(matches!(err, AdapterError::PayloadDecode(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn malformed_xml_is_rejected() {
        let err = decode_structured_field("contactDetails", "<a>1</b>").unwrap_err();
        assert!(matches!(err, AdapterError::PayloadDecode(_)));
        assert!(err.to_string().contains("XML"));
    }

    #[test]
    fn coerce_integer_accepts_plain_integers() {
        assert_eq!(coerce_integer("guests", "4").unwrap(), 4);
        assert_eq!(coerce_integer("guests", " 12 ").unwrap(), 12);
    }

    #[test]
    fn coerce_integer_rejects_non_numeric_values() {
        let err = coerce_integer("bedrooms", "many").unwrap_err();
        assert!(matches!(err, AdapterError::InvalidParameter(_)));
        assert_eq!(err.error_type(), "InvalidParameter");
    }
}
