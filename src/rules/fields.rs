use serde_json::Value;

use crate::domain::payload::DISHES;
use crate::domain::{Dish, OrderPayload};
use crate::error::OrderError;

pub fn require_field(payload: &OrderPayload, name: &str) -> Result<(), OrderError> {
    required_text(payload, name).map(|_| ())
}

/// Text of a required field, failing the same way [`require_field`] does.
pub fn required_text(payload: &OrderPayload, name: &str) -> Result<String, OrderError> {
    payload
        .text(name)
        .ok_or_else(|| OrderError::validation(format!("Order must include a {name}")))
}

/// Parses the submitted dishes, stopping at the first one without a positive
/// integer quantity.
pub fn parse_dishes(payload: &OrderPayload) -> Result<Vec<Dish>, OrderError> {
    let dishes = match payload.get(DISHES) {
        Some(Value::Array(dishes)) if !dishes.is_empty() => dishes,
        _ => return Err(OrderError::validation("Order must include at least one dish")),
    };

    dishes
        .iter()
        .enumerate()
        .map(|(index, dish)| {
            parse_dish(dish).ok_or_else(|| {
                OrderError::validation(format!(
                    "Dish {index} must have a quantity that is an integer greater than 0"
                ))
            })
        })
        .collect()
}

fn parse_dish(value: &Value) -> Option<Dish> {
    let mut details = value.as_object()?.clone();
    let quantity = positive_integer(&details.remove("quantity")?)?;
    Some(Dish { quantity, details })
}

// 2.0 is an integer; "2" is not.
fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let n = value.as_f64()?;
    (n.is_finite() && n > 0.0 && n.fract() == 0.0 && n < u64::MAX as f64).then_some(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::{DELIVER_TO, MOBILE_NUMBER};
    use serde_json::json;

    fn payload(data: Value) -> OrderPayload {
        OrderPayload::from_body(&json!({ "data": data }))
    }

    fn message(result: Result<impl std::fmt::Debug, OrderError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_require_field() {
        let p = payload(json!({ "deliverTo": "Rick", "mobileNumber": "" }));

        assert!(require_field(&p, DELIVER_TO).is_ok());
        assert_eq!(
            message(require_field(&p, MOBILE_NUMBER)),
            "Order must include a mobileNumber"
        );
        assert_eq!(message(require_field(&p, DISHES)), "Order must include a dishes");
    }

    #[test]
    fn test_empty_dishes_pass_presence_but_fail_content() {
        let p = payload(json!({ "dishes": [] }));

        assert!(require_field(&p, DISHES).is_ok());
        assert_eq!(message(parse_dishes(&p)), "Order must include at least one dish");
    }

    #[test]
    fn test_dishes_must_be_an_array() {
        for dishes in [json!("pasta"), json!({ "quantity": 1 }), json!(3)] {
            let p = payload(json!({ "dishes": dishes }));
            assert_eq!(message(parse_dishes(&p)), "Order must include at least one dish");
        }
        assert_eq!(
            message(parse_dishes(&OrderPayload::default())),
            "Order must include at least one dish"
        );
    }

    #[test]
    fn test_first_bad_quantity_is_reported() {
        let cases = [
            (json!([{ "quantity": 0 }]), 0),
            (json!([{ "quantity": 1 }, { "quantity": -2 }]), 1),
            (json!([{ "quantity": 1 }, { "quantity": 2 }, { "quantity": 1.5 }]), 2),
            (json!([{ "quantity": 3 }, { "quantity": "2" }, { "quantity": 0 }]), 1),
            (json!([{ "quantity": 1 }, { "name": "no quantity" }]), 1),
            (json!([7]), 0),
        ];

        for (dishes, index) in cases {
            let p = payload(json!({ "dishes": dishes }));
            assert_eq!(
                message(parse_dishes(&p)),
                format!("Dish {index} must have a quantity that is an integer greater than 0")
            );
        }
    }

    #[test]
    fn test_parse_dishes_keeps_details() {
        let p = payload(json!({
            "dishes": [
                { "name": "Broccoli and beetroot stir fry", "price": 15, "quantity": 2 },
                { "quantity": 3.0 },
            ]
        }));

        let dishes = parse_dishes(&p).unwrap();
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].quantity, 2);
        assert_eq!(dishes[0].details["price"], json!(15));
        assert!(!dishes[0].details.contains_key("quantity"));
        assert_eq!(dishes[1], Dish::new(3));
    }

    #[test]
    fn test_quantity_beyond_u64_is_rejected() {
        let body: Value =
            serde_json::from_str(r#"{ "data": { "dishes": [{ "quantity": 18446744073709551616 }] } }"#)
                .unwrap();
        assert_eq!(
            message(parse_dishes(&OrderPayload::from_body(&body))),
            "Dish 0 must have a quantity that is an integer greater than 0"
        );

        // Largest f64 below 2^64.
        let p = payload(json!({ "dishes": [{ "quantity": 18446744073709549568.0 }] }));
        assert_eq!(parse_dishes(&p).unwrap()[0].quantity, 18446744073709549568);
    }
}
