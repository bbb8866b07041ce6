pub const CATEGORIES: [&str; 7] = [
    "reciclagem de papel",
    "reciclagem de plástico",
    "reciclagem de vidro",
    "reciclagem de metal",
    "reciclagem de eletrônico",
    "reciclagem de orgânica",
    "reciclagem de quimicos",
];

pub fn categories() -> Vec<String> {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}
