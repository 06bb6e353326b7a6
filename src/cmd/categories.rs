use handodds::HandCategory;
use strum::IntoEnumIterator;

pub fn run() {
    println!("Hand categories (name - rank):");
    for category in HandCategory::iter() {
        println!("* {}", category.display_name_value());
    }
}
