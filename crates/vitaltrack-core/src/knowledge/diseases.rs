//! Disease-specific food guidance and the free-text condition matcher.

use serde::Serialize;

/// Food guidance for one chronic condition.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DiseaseGuide {
    /// Lower-case disease name, also the adherence key
    pub name: &'static str,
    pub foods_to_eat: &'static [&'static str],
    pub foods_to_avoid: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub alerts: &'static [&'static str],
}

/// Known diseases, in display order.
pub static DISEASE_GUIDES: [DiseaseGuide; 6] = [
    DiseaseGuide {
        name: "diabetes",
        foods_to_eat: &[
            "Leafy greens (spinach, kale)",
            "Whole grains (oats, brown rice)",
            "Lean proteins (chicken, fish)",
            "Berries (blueberries, strawberries)",
            "Nuts and seeds",
            "Legumes (beans, lentils)",
            "Non-starchy vegetables",
            "Greek yogurt",
        ],
        foods_to_avoid: &[
            "Sugary drinks and sodas",
            "White bread and refined grains",
            "Processed foods",
            "High-sugar desserts",
            "Fried foods",
            "Full-fat dairy",
            "Fruit juices",
            "Candy and chocolate",
        ],
        tips: &[
            "Monitor portion sizes carefully",
            "Eat at regular intervals",
            "Combine carbs with protein",
            "Stay hydrated with water",
        ],
        alerts: &[
            "Check blood sugar levels regularly",
            "Consult with a nutritionist",
            "Monitor weight changes",
        ],
    },
    DiseaseGuide {
        name: "hypertension",
        foods_to_eat: &[
            "Low-sodium vegetables",
            "Potassium-rich foods (bananas, sweet potatoes)",
            "Whole grains",
            "Lean meats",
            "Fish rich in omega-3 (salmon, mackerel)",
            "Low-fat dairy",
            "Garlic and herbs",
            "Olive oil",
        ],
        foods_to_avoid: &[
            "High-sodium processed foods",
            "Canned soups and vegetables",
            "Deli meats and bacon",
            "Cheese and butter",
            "Salty snacks",
            "Soy sauce and condiments",
            "Alcohol",
            "Caffeine in excess",
        ],
        tips: &[
            "Limit sodium to less than 2,300mg daily",
            "Increase potassium intake",
            "Exercise regularly",
            "Manage stress levels",
        ],
        alerts: &[
            "Monitor blood pressure daily",
            "Reduce sodium gradually",
            "Avoid sudden dietary changes",
        ],
    },
    DiseaseGuide {
        name: "cholesterol",
        foods_to_eat: &[
            "Oats and whole grains",
            "Fatty fish (salmon, sardines)",
            "Nuts and seeds",
            "Olive oil",
            "Avocados",
            "Beans and legumes",
            "Fruits and vegetables",
            "Plant sterols (fortified foods)",
        ],
        foods_to_avoid: &[
            "Saturated fats (butter, lard)",
            "Trans fats (processed foods)",
            "Red meat",
            "Full-fat dairy",
            "Egg yolks (limit)",
            "Fried foods",
            "Pastries and baked goods",
            "Coconut oil",
        ],
        tips: &[
            "Increase fiber intake",
            "Choose lean proteins",
            "Cook with healthy oils",
            "Read nutrition labels",
        ],
        alerts: &[
            "Get cholesterol levels checked",
            "Monitor LDL and HDL ratios",
            "Combine diet with exercise",
        ],
    },
    DiseaseGuide {
        name: "obesity",
        foods_to_eat: &[
            "Lean proteins",
            "Whole grains",
            "Vegetables (all types)",
            "Fruits (in moderation)",
            "Low-fat dairy",
            "Legumes",
            "Nuts (small portions)",
            "Water and herbal tea",
        ],
        foods_to_avoid: &[
            "High-calorie processed foods",
            "Sugary drinks",
            "Fast food",
            "Fried foods",
            "High-fat snacks",
            "Alcohol",
            "Desserts and sweets",
            "Refined carbohydrates",
        ],
        tips: &[
            "Practice portion control",
            "Eat slowly and mindfully",
            "Increase physical activity",
            "Track calorie intake",
        ],
        alerts: &[
            "Monitor weight weekly",
            "Set realistic goals",
            "Seek professional guidance",
        ],
    },
    DiseaseGuide {
        name: "heart disease",
        foods_to_eat: &[
            "Fatty fish (omega-3 rich)",
            "Whole grains",
            "Vegetables and fruits",
            "Nuts and seeds",
            "Olive oil",
            "Legumes",
            "Low-fat dairy",
            "Garlic and spices",
        ],
        foods_to_avoid: &[
            "Saturated fats",
            "Trans fats",
            "High-sodium foods",
            "Processed meats",
            "Fried foods",
            "Full-fat dairy",
            "Sugary foods",
            "Alcohol in excess",
        ],
        tips: &[
            "Follow Mediterranean diet",
            "Limit sodium intake",
            "Maintain healthy weight",
            "Exercise regularly",
        ],
        alerts: &[
            "Monitor heart rate",
            "Check blood pressure",
            "Avoid stress triggers",
        ],
    },
    DiseaseGuide {
        name: "thyroid disorder",
        foods_to_eat: &[
            "Iodine-rich foods (seaweed, fish)",
            "Selenium sources (Brazil nuts, eggs)",
            "Zinc sources (oysters, beef)",
            "Whole grains",
            "Lean proteins",
            "Vegetables",
            "Fruits",
            "Healthy fats",
        ],
        foods_to_avoid: &[
            "Cruciferous vegetables (raw)",
            "Soy products (in excess)",
            "Processed foods",
            "High-iodine supplements",
            "Excess caffeine",
            "Alcohol",
            "Refined sugars",
            "Trans fats",
        ],
        tips: &[
            "Take medications as prescribed",
            "Maintain consistent iodine intake",
            "Cook cruciferous vegetables",
            "Regular thyroid monitoring",
        ],
        alerts: &[
            "Get TSH levels checked",
            "Avoid iodine-rich foods if hyperthyroid",
            "Consult endocrinologist",
        ],
    },
];

/// Guide for an exact disease name (case-insensitive).
pub fn disease_guide(name: &str) -> Option<&'static DiseaseGuide> {
    let name = name.trim().to_lowercase();
    DISEASE_GUIDES.iter().find(|g| g.name == name)
}

/// Names of all known diseases, in display order.
pub fn known_diseases() -> impl Iterator<Item = &'static str> {
    DISEASE_GUIDES.iter().map(|g| g.name)
}

/// Diseases whose name occurs anywhere in `conditions`.
///
/// Matching is a case-insensitive substring test, not tokenization:
/// "prediabetes" matches `diabetes` and "high cholesterol" matches
/// `cholesterol`.
pub fn match_conditions(conditions: &str) -> Vec<&'static DiseaseGuide> {
    let conditions = conditions.to_lowercase();
    DISEASE_GUIDES
        .iter()
        .filter(|g| conditions.contains(g.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(guides: &[&DiseaseGuide]) -> Vec<&'static str> {
        guides.iter().map(|g| g.name).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let matched = match_conditions("Type 2 Diabetes and Hypertension");
        assert_eq!(names(&matched), vec!["diabetes", "hypertension"]);
    }

    #[test]
    fn test_multi_word_names() {
        let matched = match_conditions("History of HEART DISEASE; thyroid disorder (hypo)");
        assert_eq!(names(&matched), vec!["heart disease", "thyroid disorder"]);
    }

    #[test]
    fn test_prediabetes_matches_diabetes() {
        let matched = match_conditions("prediabetes");
        assert_eq!(names(&matched), vec!["diabetes"]);
    }

    #[test]
    fn test_no_match() {
        assert!(match_conditions("None").is_empty());
        assert!(match_conditions("").is_empty());
        assert!(match_conditions("heart").is_empty());
    }

    #[test]
    fn test_table_order_not_text_order() {
        let matched = match_conditions("obesity, diabetes");
        assert_eq!(names(&matched), vec!["diabetes", "obesity"]);
    }

    #[test]
    fn test_guide_lookup() {
        let guide = disease_guide("Hypertension").unwrap();
        assert_eq!(guide.foods_to_eat.len(), 8);
        assert_eq!(guide.foods_to_avoid.len(), 8);
        assert_eq!(guide.tips.len(), 4);
        assert_eq!(guide.alerts.len(), 3);
        assert!(disease_guide("asthma").is_none());
        assert_eq!(known_diseases().count(), 6);
    }
}
