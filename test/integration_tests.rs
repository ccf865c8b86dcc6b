use menuseed::{Category, DietaryTag, ScriptWriter, SeedGenerator};
use tempfile::TempDir;

#[tokio::test]
async fn test_full_workflow() {
    // Создать временную директорию для тестов
    let temp_dir = TempDir::new().unwrap();
    let migrations = temp_dir.path().join("supabase").join("migrations");
    std::fs::create_dir_all(&migrations).unwrap();
    let output_path = migrations.join("20240221_insert_new_items.sql");

    let generator = SeedGenerator::new().unwrap();
    let writer = ScriptWriter::new(&output_path);
    let (report, summary) = generator.generate(&writer).await.unwrap();

    assert_eq!(report.statements, 125);
    assert_eq!(summary.total_items, 125);

    let written = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 126);
    assert_eq!(lines[0], "-- Insert new menu items");
    assert_eq!(
        lines[1],
        "INSERT INTO menu_items (name, description, category, single_price, has_size_options, dietary_tags, is_active, sort_order) VALUES ('Paav Bhaji', 'Spicy mashed veggies with buttery buns, a Mumbai street classic you’ll devour.', 'special_items', 9.99, false, '{vegetarian}', true, 100);"
    );
    assert_eq!(
        lines[20],
        "INSERT INTO menu_items (name, description, category, single_price, has_size_options, dietary_tags, is_active, sort_order) VALUES ('Bombay Vada Paav (Qty: 2 pieces)', 'Spiced potato fritters in buns, Mumbai-style, crispy and bold, a street snack you’ll crave.', 'special_items', 9.99, false, '{vegetarian}', true, 119);"
    );
    assert_eq!(
        lines[125],
        "INSERT INTO menu_items (name, description, category, single_price, has_size_options, dietary_tags, is_active, sort_order) VALUES ('Desi Home Made Dahi', 'Thick, creamy homemade yogurt, pure and tangy, a classic you’ll want on every plate.', 'sides', 3.99, false, '{vegetarian}', true, 224);"
    );
    assert!(written.ends_with(");\n"));
}

#[tokio::test]
async fn test_generate_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("nope").join("seed.sql");

    let generator = SeedGenerator::new().unwrap();
    let writer = ScriptWriter::new(&output_path);

    assert!(generator.generate(&writer).await.is_err());
}

#[test]
fn test_corpus_edge_lines() {
    let generator = SeedGenerator::new().unwrap();
    let sql = generator.render_sql().unwrap();

    // кавычки удваиваются
    assert!(sql.contains(
        "VALUES ('Chili-Garlic ''Hot'' Chutney', 'Fiery garlic and chili blend, bold and spicy, a kick you’ll crave on the side.', 'chutneys', 3.99, false, '{vegetarian,vegan}', true, 211);"
    ));
    // описание отсутствует, используется имя
    assert!(sql.contains(
        "VALUES ('Medhu Vadai with Sambar and Coconut Chutney', 'Medhu Vadai with Sambar and Coconut Chutney', 'breakfast', 8.99, false, '{vegetarian,vegan}', true, 155);"
    ));
    assert!(sql.contains("VALUES ('Carrot Halwa', 'Sweet, rich carrot pudding with milk, a warm hug in every spoonful.', 'dessert', 4.99,"));
    assert!(sql.contains("bread,！crunchy toppings make it a must-try."));
}

#[test]
fn test_corpus_invariants() {
    let generator = SeedGenerator::new().unwrap();
    let items = generator.parse_items().unwrap();

    for (index, item) in items.iter().enumerate() {
        assert_eq!(item.sort_order, 100 + index as u32);
        let category = item.category.expect("every corpus item follows a header");
        assert_eq!(item.price, category.unit_price());
        assert!(!item.has_size_options);
        assert!(item.is_active);
        assert!(!item.name.is_empty());
        assert!(!item.description.is_empty());
    }

    let vegan_gobi = items.iter().find(|i| i.name == "Gobi Manchurian").unwrap();
    assert_eq!(vegan_gobi.dietary_tags, vec![DietaryTag::Vegetarian, DietaryTag::Vegan]);

    let puffs = items.iter().find(|i| i.name == "Egg Puffs (2)").unwrap();
    assert!(puffs.dietary_tags.is_empty());

    let pani_puri = items.iter().find(|i| i.name.starts_with("Pani Puri")).unwrap();
    assert_eq!(
        pani_puri.name,
        "Pani Puri (12 puri, potatoes, chana, sprout mix w/ paani and chutney and onion)"
    );
}

#[test]
fn test_corpus_summary() {
    let generator = SeedGenerator::new().unwrap();
    let summary = generator.summary().unwrap();

    assert_eq!(summary.count_for(Category::SpecialItems), 51);
    assert_eq!(summary.count_for(Category::Breakfast), 19);
    assert_eq!(summary.count_for(Category::Dessert), 35);
    assert_eq!(summary.count_for(Category::Chutneys), 9);
    assert_eq!(summary.count_for(Category::Sides), 11);
    assert_eq!(summary.uncategorized, 0);
    assert_eq!(summary.dietary.vegetarian, 117);
    assert_eq!(summary.dietary.vegan, 54);
    assert_eq!(summary.dietary.untagged, 8);
    assert_eq!(summary.sort_order_range, Some((100, 224)));
    assert_eq!(summary.repeated_names.len(), 1);
    assert_eq!(summary.repeated_names[0].name, "Daal Vada");

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["categories"][0]["category"], "special_items");
    assert_eq!(json["categories"][0]["unit_price"], "9.99");
    assert_eq!(json["categories"][1]["unit_price"], "8.99");
    assert!(json.get("generated_at").is_some());
}
