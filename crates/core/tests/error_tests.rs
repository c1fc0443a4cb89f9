// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("amount must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: amount must be non-negative"
        );
    }

    #[test]
    fn operation_not_found() {
        let err = CoreError::OperationNotFound("42".into());
        assert_eq!(err.to_string(), "Operation not found: 42");
    }

    #[test]
    fn category_not_found() {
        let err = CoreError::CategoryNotFound("7".into());
        assert_eq!(err.to_string(), "Category not found: 7");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad float".into());
        assert_eq!(err.to_string(), "Serialization error: bad float");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── Debug trait ─────────────────────────────────────────────────────

mod debug_trait {
    use super::*;

    #[test]
    fn all_variants_are_debug() {
        let variants: Vec<CoreError> = vec![
            CoreError::ValidationError("test".into()),
            CoreError::OperationNotFound("test".into()),
            CoreError::CategoryNotFound("test".into()),
            CoreError::Serialization("test".into()),
            CoreError::Deserialization("test".into()),
        ];

        for variant in &variants {
            let debug = format!("{:?}", variant);
            assert!(!debug.is_empty());
        }
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1, 2,").unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Deserialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Deserialization, got {:?}", other),
        }
    }

    #[test]
    fn question_mark_converts() {
        fn parse(s: &str) -> Result<u32, CoreError> {
            Ok(serde_json::from_str(s)?)
        }
        assert_eq!(parse("7").unwrap(), 7);
        assert!(matches!(parse("x"), Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::OperationNotFound("1".into()));
    }
}
