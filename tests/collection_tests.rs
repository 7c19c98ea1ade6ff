//! # Recipe Collection Tests
//!
//! Loads small recipe trees written to a temporary directory.

#[cfg(test)]
mod tests {
    use recipe_ner::collection::{LoadOptions, RecipeCollection};
    use recipe_ner::encoding::TextEncoding;
    use recipe_ner::errors::RecipeError;
    use recipe_ner::recipe_parser::Servings;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_recipe(root: &Path, category: &str, file: &str, content: &[u8]) {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    fn sample_tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_recipe(root, "postres", "torta.txt", b"Torta\n2 huevos\n1 taza harina\nDa 8 raciones\n");
        write_recipe(root, "postres", "flan.txt", b"Flan\n4 huevos\n1 litro leche\nDa 3 tazas\n");
        write_recipe(root, "postres", "pendiente.txt", b"");
        write_recipe(root, "salsas", "pesto.txt", b"Pesto\n- Base\n1 taza albahaca\n2 dientes ajo\nDa 4 porciones\n");
        write_recipe(root, "salsas", "borrador.txt", b"\n  \n\n");
        dir
    }

    #[test]
    fn test_empty_files_are_accounted() {
        let dir = sample_tree();
        let collection = RecipeCollection::load(dir.path(), LoadOptions::default()).unwrap();

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.empty_keys().len(), 2);
        assert_eq!(collection.total(), 5);
        assert!(collection.empty_keys().contains("pendiente"));
        assert!(collection.empty_keys().contains("borrador"));
        assert_eq!(collection.ingredient_count(), 6);
    }

    #[test]
    fn test_documents_are_indexed_by_key() {
        let dir = sample_tree();
        let collection = RecipeCollection::load(dir.path(), LoadOptions::default()).unwrap();

        let flan = collection.get("flan").unwrap();
        assert_eq!(flan.category, "postres");
        assert_eq!(flan.servings, Servings::VolumeYield);

        let pesto = collection.get("pesto").unwrap();
        assert_eq!(pesto.category, "salsas");
        assert_eq!(pesto.ingredients[1].section.as_deref(), Some("Base"));

        let keys: Vec<&str> = collection.recipes().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["flan", "pesto", "torta"]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = sample_tree();
        let options = LoadOptions {
            encoding: TextEncoding::Utf8,
            verbose: true,
        };
        let first = RecipeCollection::load(dir.path(), options).unwrap();
        let second = RecipeCollection::load(dir.path(), options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_failure_aborts_load() {
        let dir = sample_tree();
        write_recipe(dir.path(), "salsas", "rota.txt", b"Salsa rota\n1 tomate\nCocinar\n");

        let err = RecipeCollection::load(dir.path(), LoadOptions::default()).unwrap_err();
        assert_eq!(
            err,
            RecipeError::MissingServings {
                recipe: "Salsa rota".to_string()
            }
        );
    }

    #[test]
    fn test_files_at_category_level_are_skipped() {
        let dir = sample_tree();
        fs::write(dir.path().join("LEEME.txt"), "notas").unwrap();

        let collection = RecipeCollection::load(dir.path(), LoadOptions::default()).unwrap();
        assert_eq!(collection.total(), 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_categories_and_files_are_loaded() {
        use std::os::unix::fs::symlink;

        let shared = tempfile::tempdir().unwrap();
        write_recipe(shared.path(), "panes", "pan.txt", b"Pan\n1 kg harina\nDa 2 panes\n");
        fs::write(shared.path().join("vacia.txt"), b"").unwrap();

        let dir = sample_tree();
        symlink(shared.path().join("panes"), dir.path().join("panes")).unwrap();
        symlink(shared.path().join("vacia.txt"), dir.path().join("postres").join("vacia.txt")).unwrap();

        let collection = RecipeCollection::load(dir.path(), LoadOptions::default()).unwrap();
        assert_eq!(collection.get("pan").unwrap().category, "panes");
        assert!(collection.empty_keys().contains("vacia"));
        assert_eq!(collection.total(), 7);
    }

    #[test]
    fn test_latin1_sources() {
        let dir = tempfile::tempdir().unwrap();
        // "Piñata\n2 tazas azúcar\nDa 6 raciones" in Latin-1
        let content = b"Pi\xf1ata\n2 tazas az\xfacar\nDa 6 raciones\n";
        write_recipe(dir.path(), "fiestas", "pinata.txt", content);

        let utf8 = RecipeCollection::load(dir.path(), LoadOptions::default());
        assert!(utf8.is_err());

        let options = LoadOptions {
            encoding: TextEncoding::Latin1,
            verbose: false,
        };
        let collection = RecipeCollection::load(dir.path(), options).unwrap();
        let recipe = collection.get("pinata").unwrap();
        assert_eq!(recipe.name, "Piñata");
        assert_eq!(recipe.ingredients[0].text, "2 tazas azúcar");
    }
}
