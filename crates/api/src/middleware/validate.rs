use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

type Rejection = (StatusCode, Json<ErrorResponse>);

/// JSON body that has passed its `validator` rules.
pub struct SimpleValidatedJson<T>(pub T);

/// `application/x-www-form-urlencoded` body that has passed its `validator` rules.
pub struct SimpleValidatedForm<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| malformed(rejection.body_text()))?;

        value.validate().map_err(|errors| invalid(&errors))?;

        Ok(Self(value))
    }
}

impl<S, T> FromRequest<S> for SimpleValidatedForm<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| malformed(rejection.body_text()))?;

        value.validate().map_err(|errors| invalid(&errors))?;

        Ok(Self(value))
    }
}

// Every malformed body is a 400, including the 422 axum gives to JSON that
// parses but does not fit the target type.
fn malformed(message: String) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(format!("Invalid request body: {message}"))),
    )
}

fn invalid(errors: &ValidationErrors) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(
            ErrorResponse::new(format_validation_errors(errors))
                .with_details(format_validation_errors_detailed(errors)),
        ),
    )
}

fn field_message(field: &str, error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "email" => "Invalid email format".to_string(),
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            _ => format!("Invalid {field}"),
        })
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |e| format!("{field}: {}", field_message(field, e)))
        })
        .collect();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| field_message(&field, e))
            .collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
        cantidad: i64,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn detailed_errors_are_keyed_by_field() {
        let probe = Probe {
            cantidad: 0,
            email: "nope".into(),
        };
        let errors = probe.validate().unwrap_err();
        let details = format_validation_errors_detailed(&errors);

        assert_eq!(details["cantidad"][0], "Quantity must be greater than zero");
        assert_eq!(details["email"][0], "Invalid email format");
    }

    #[test]
    fn summary_joins_every_field() {
        let probe = Probe {
            cantidad: 0,
            email: "ok@example.com".into(),
        };
        let errors = probe.validate().unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "cantidad: Quantity must be greater than zero"
        );
    }
}
