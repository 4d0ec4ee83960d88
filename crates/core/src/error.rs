#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid {entity} id: {raw}")]
    InvalidId { entity: &'static str, raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_only_the_entity() {
        let err = CoreError::NotFound {
            entity: "Product",
            id: "0190f1c2-0000-7000-8000-000000000000".into(),
        };
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn invalid_id_message_includes_raw_value() {
        let err = CoreError::InvalidId {
            entity: "product",
            raw: "abc".into(),
        };
        assert_eq!(err.to_string(), "Invalid product id: abc");
    }
}
