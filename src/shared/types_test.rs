//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::core::features::translator::languages::LanguageOption;
    use crate::core::features::translator::types::Route;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // Writes the front-end types to bindings/bindings.ts
        TranslateRequest::export().expect("Failed to export TranslateRequest");
        TranslateResponse::export().expect("Failed to export TranslateResponse");
        DetectBrailleResponse::export().expect("Failed to export DetectBrailleResponse");
        LanguageOption::export().expect("Failed to export LanguageOption");
        Route::export().expect("Failed to export Route");
    }

    #[test]
    fn test_route_binding_uses_snake_case() {
        let decl = Route::decl();
        assert!(decl.contains("\"local_decode\""), "{}", decl);
    }
}
