#[cfg(test)]
mod tests {
    use label_lens::errors::AppError;
    use label_lens::knowledge::SafetyRating;
    use label_lens::pipeline::LabelScanner;

    fn create_scanner() -> LabelScanner {
        LabelScanner::new()
    }

    #[test]
    fn test_three_way_classification_in_position_order() {
        let scanner = create_scanner();
        let result = scanner
            .scan("Ingredients: Water, Sugar, Red Dye 40", 0.9)
            .unwrap();

        assert_eq!(result.ingredients.len(), 3);

        assert_eq!(result.ingredients[0].name, "Water");
        assert_eq!(result.ingredients[0].rating, SafetyRating::Safe);
        assert_eq!(result.ingredients[0].position, 1);

        assert_eq!(result.ingredients[1].name, "Sugar");
        assert_eq!(result.ingredients[1].rating, SafetyRating::Caution);
        assert_eq!(result.ingredients[1].position, 2);

        assert_eq!(result.ingredients[2].name, "Red Dye 40");
        assert_eq!(result.ingredients[2].rating, SafetyRating::Avoid);
        assert_eq!(result.ingredients[2].position, 3);
    }

    #[test]
    fn test_too_short_text_fails_with_typed_error() {
        let scanner = create_scanner();
        let result = scanner.scan("Hi", 0.9);
        assert_eq!(result, Err(AppError::EmptyOrTooShortText));
    }

    #[test]
    fn test_unknown_ingredient_gets_caution_fallback() {
        let scanner = create_scanner();
        let result = scanner.scan("Ingredients: Xanthan Gum", 0.8).unwrap();

        assert_eq!(result.ingredients.len(), 1);
        let unknown = &result.ingredients[0];
        assert_eq!(unknown.rating, SafetyRating::Caution);
        assert_eq!(
            unknown.explanation,
            "not in database, prefer simpler ingredient lists"
        );
        assert!(unknown.sources.is_empty());
        // No exact match, multi-word name: base score only
        assert_eq!(unknown.confidence, 70);
    }

    #[test]
    fn test_parenthetical_sub_ingredients_stay_attached() {
        let scanner = create_scanner();
        let result = scanner
            .scan("Ingredients: Vitamin C (Ascorbic Acid), Salt", 0.9)
            .unwrap();

        assert_eq!(result.ingredients.len(), 2);
        assert_eq!(result.ingredients[0].name, "Vitamin C (Ascorbic Acid)");
        assert_eq!(result.ingredients[1].name, "Salt");
        assert_eq!(result.ingredients[1].rating, SafetyRating::Safe);
    }

    #[test]
    fn test_confidence_bounds_hold_for_every_ingredient() {
        let scanner = create_scanner();
        let result = scanner
            .scan(
                "Ingredients: Water, Sugar, Red Dye 40, Xanthan Gum, Whole Milk Powder, \
                 Sodium Benzoate, Carbonated Water, Aspartame",
                55.0,
            )
            .unwrap();

        assert!(result.confidence <= 100);
        for ingredient in &result.ingredients {
            assert!(
                ingredient.confidence <= 98,
                "'{}' scored {}",
                ingredient.name,
                ingredient.confidence
            );
        }
    }

    #[test]
    fn test_allergens_reported_only_for_literal_substrings() {
        let scanner = create_scanner();
        let result = scanner
            .scan("Ingredients: Whole Milk Powder, Water", 0.9)
            .unwrap();

        let milk_powder = &result.ingredients[0];
        assert_eq!(milk_powder.allergens, vec!["milk"]);
        assert!(!milk_powder.allergens.contains(&"dairy".to_string()));
        assert!(result.ingredients[1].allergens.is_empty());
    }

    #[test]
    fn test_avoid_ingredient_carries_concerns_and_sources() {
        let scanner = create_scanner();
        let result = scanner
            .scan("Ingredients: Sodium Benzoate, Water", 0.9)
            .unwrap();

        let benzoate = &result.ingredients[0];
        assert_eq!(benzoate.rating, SafetyRating::Avoid);
        assert_eq!(
            benzoate.concerns,
            vec!["may pose health risks", "consider avoiding"]
        );
        assert!(!benzoate.sources.is_empty());
    }

    #[test]
    fn test_coloring_tag_generated_for_dyes() {
        let scanner = create_scanner();
        let result = scanner.scan("Ingredients: Red Dye 40, Water", 0.9).unwrap();

        let dye = &result.ingredients[0];
        assert!(dye
            .concerns
            .contains(&"contains artificial coloring".to_string()));
    }

    #[test]
    fn test_fallback_whole_text_when_no_marker() {
        let scanner = create_scanner();
        let result = scanner.scan("Water, Sugar, Salt", 0.9).unwrap();
        assert_eq!(result.ingredients.len(), 3);
    }

    #[test]
    fn test_ocr_noise_segments_are_dropped() {
        let scanner = create_scanner();
        let result = scanner
            .scan("Ingredients: Water, 77g, ., Salt, (), Sugar", 0.9)
            .unwrap();

        let names: Vec<&str> = result.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Water", "Salt", "Sugar"]);
    }

    #[test]
    fn test_multiline_ocr_text_is_normalized_first() {
        let scanner = create_scanner();
        let result = scanner
            .scan("INGREDIENTS:\nWater,\nSugar,   Salt", 0.9)
            .unwrap();
        assert_eq!(result.ingredients.len(), 3);
    }

    #[test]
    fn test_result_serializes_to_presentation_shape() {
        let scanner = create_scanner();
        let result = scanner.scan("Ingredients: Water, Red Dye 40", 0.9).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();

        assert_eq!(json["confidence"], 90);
        assert_eq!(json["rawText"], "Ingredients: Water, Red Dye 40");

        let first = &json["ingredients"][0];
        assert_eq!(first["name"], "Water");
        assert_eq!(first["rating"], "safe");
        assert_eq!(first["position"], 1);
        assert!(first["explanation"].is_string());
        assert!(first["sources"].is_array());

        let second = &json["ingredients"][1];
        assert_eq!(second["rating"], "avoid");
    }

    #[test]
    fn test_scan_is_deterministic() {
        let scanner = create_scanner();
        let text = "Ingredients: Water, Sugar, Sodium Benzoate";
        let first = scanner.scan(text, 0.8).unwrap();
        let second = scanner.scan(text, 0.8).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scanner_is_shareable_across_threads() {
        let scanner = std::sync::Arc::new(create_scanner());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let scanner = std::sync::Arc::clone(&scanner);
            handles.push(std::thread::spawn(move || {
                scanner
                    .scan("Ingredients: Water, Sugar, Red Dye 40", 0.9)
                    .unwrap()
            }));
        }
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert_eq!(result, &results[0]);
        }
    }
}
