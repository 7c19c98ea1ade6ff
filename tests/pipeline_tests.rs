//! # Interpretation Pipeline Tests
//!
//! Recipe text → ingredient lines → annotator spans → classification,
//! using an annotation export in place of a live NER model.

#[cfg(test)]
mod tests {
    use recipe_ner::annotator::{Annotator, FileAnnotator};
    use recipe_ner::classifier::{markup, Classification, EntityClassifier, EntityLabel};
    use recipe_ner::collection::{LoadOptions, RecipeCollection};
    use recipe_ner::report::check_collection;
    use recipe_ner::units::UnitTable;
    use std::fs;

    const MEASURES: &str = r#"{
        "cup": "^taza",
        "cups": "^tazas",
        "tbsp": "^cda",
        "g": "^g(r|ramos)?$"
    }"#;

    const ANNOTATIONS: &str = r#"[
        {"text": "2 tazas de harina", "label": [
            {"start": 0, "end": 1, "labels": ["AMOUNT"]},
            {"start": 2, "end": 7, "labels": ["MEASURE"]},
            {"start": 11, "end": 17, "labels": ["FOOD"]}
        ]},
        {"text": "½ taza de azúcar", "label": [
            {"start": 0, "end": 1, "labels": ["AMOUNT"]},
            {"start": 2, "end": 6, "labels": ["MEASURE"]},
            {"start": 10, "end": 16, "labels": ["FOOD"]}
        ]},
        {"text": "3 huevos", "label": [
            {"start": 0, "end": 1, "labels": ["LOC"]},
            {"start": 2, "end": 8, "labels": ["FOOD"]}
        ]},
        {"text": "2 o 3 cdas de aceite", "label": [
            {"start": 0, "end": 1, "labels": ["AMOUNT"]},
            {"start": 4, "end": 5, "labels": ["AMOUNT"]},
            {"start": 6, "end": 10, "labels": ["MEASURE"]},
            {"start": 14, "end": 20, "labels": ["FOOD"]}
        ]},
        {"text": "1½ pizca de sal", "label": [
            {"start": 0, "end": 2, "labels": ["AMOUNT"]},
            {"start": 3, "end": 8, "labels": ["MEASURE"]},
            {"start": 12, "end": 15, "labels": ["FOOD"]}
        ]}
    ]"#;

    fn units() -> UnitTable {
        UnitTable::from_json_str(MEASURES).unwrap()
    }

    #[test]
    fn test_first_declared_unit_wins() {
        let units = units();
        assert_eq!(units.match_unit("tazas"), Some("cup"));
        assert_eq!(units.match_unit("gramos"), Some("g"));
        assert_eq!(units.match_unit("pizca"), None);
    }

    #[tokio::test]
    async fn test_annotated_lines_classify() {
        let annotator = FileAnnotator::from_json_str(ANNOTATIONS).unwrap();
        let units = units();
        let classifier = EntityClassifier::new(&units);

        let line = "½ taza de azúcar";
        let spans = annotator.annotate(line).await.unwrap();
        let parsed = classifier.classify(&spans, line).parsed().cloned().unwrap();
        assert_eq!(parsed.amount, 0.5);
        assert_eq!(parsed.measure, "cup");
        assert_eq!(parsed.foods, vec!["azúcar".to_string()]);

        let line = "3 huevos";
        let spans = annotator.annotate(line).await.unwrap();
        assert_eq!(spans[0].label, EntityLabel::Location);
        let parsed = classifier.classify(&spans, line).parsed().cloned().unwrap();
        assert_eq!(parsed.amount, 3.0);
        assert_eq!(parsed.measure, "");

        // Unresolved measure is dropped, the line stays valid
        let line = "1½ pizca de sal";
        let spans = annotator.annotate(line).await.unwrap();
        let parsed = classifier.classify(&spans, line).parsed().cloned().unwrap();
        assert_eq!(parsed.amount, 1.5);
        assert_eq!(parsed.measure, "");
    }

    #[tokio::test]
    async fn test_ambiguous_line_keeps_candidates() {
        let annotator = FileAnnotator::from_json_str(ANNOTATIONS).unwrap();
        let units = units();
        let classifier = EntityClassifier::new(&units);

        let line = "2 o 3 cdas de aceite";
        let spans = annotator.annotate(line).await.unwrap();
        match classifier.classify(&spans, line) {
            Classification::NeedsReview(candidates) => {
                assert_eq!(candidates.amounts, vec![2.0, 3.0]);
                assert_eq!(candidates.measures, vec!["tbsp".to_string()]);
                assert_eq!(candidates.foods, vec!["aceite".to_string()]);
            }
            other => panic!("expected review, got {other:?}"),
        }
        assert_eq!(
            markup(line, &spans),
            "[AMOUNT 2] o [AMOUNT 3] [MEASURE cdas] de [FOOD aceite]"
        );
    }

    #[tokio::test]
    async fn test_unannotated_line_needs_review() {
        let annotator = FileAnnotator::from_json_str(ANNOTATIONS).unwrap();
        let units = units();
        let classifier = EntityClassifier::new(&units);

        let spans = annotator.annotate("sal a gusto").await.unwrap();
        assert!(spans.is_empty());
        assert!(!classifier.classify(&spans, "sal a gusto").is_valid());
    }

    #[tokio::test]
    async fn test_check_collection_report() {
        let dir = tempfile::tempdir().unwrap();
        let postres = dir.path().join("postres");
        fs::create_dir(&postres).unwrap();
        fs::write(
            postres.join("torta.txt"),
            "Torta\n2 tazas de harina\n½ taza de azúcar\n3 huevos\nDa 8 raciones\n",
        )
        .unwrap();
        let salsas = dir.path().join("salsas");
        fs::create_dir(&salsas).unwrap();
        fs::write(
            salsas.join("aderezo.txt"),
            "Aderezo\n2 o 3 cdas de aceite\n1½ pizca de sal\nDa 2 porciones\n",
        )
        .unwrap();

        let collection = RecipeCollection::load(dir.path(), LoadOptions::default()).unwrap();
        let annotator = FileAnnotator::from_json_str(ANNOTATIONS).unwrap();
        let units = units();

        let report = check_collection(&collection, &annotator, EntityClassifier::new(&units))
            .await
            .unwrap();

        assert_eq!(report.total, 5);
        assert_eq!(report.valid, 4);
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(report.measures.len(), 2);
        let foods: Vec<&str> = report.foods.iter().map(String::as_str).collect();
        assert_eq!(foods, vec!["azúcar", "harina", "huevos", "sal"]);
        assert!(report.to_string().ends_with("Measures: 2\nFood: 4\nValid: 4 / 5"));
    }
}
