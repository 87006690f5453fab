//! Compiled-in reference tables for pseudonyms and avatar colors.
//!
//! Entries are addressed by `hash % len`, so the contents AND the order of
//! every table are part of the public contract. Any edit re-keys every
//! previously assigned identity and must bump [`TABLE_VERSION`].

/// Version of the reference tables below.
pub const TABLE_VERSION: u32 = 1;

/// Number of entries in each color palette.
pub const PALETTE_LEN: usize = 10;

/// Animal names used to build `Anonymous <Name>` pseudonyms.
pub static NAMES: [&str; 209] = [
    "Aardvark", "Albatross", "Alligator", "Alpaca", "Ant", "Anteater", "Antelope", "Armadillo",
    "Badger", "Barracuda", "Bat", "Bear", "Beaver", "Bee", "Bison", "Boar", "Buffalo", "Butterfly",
    "Camel", "Capybara", "Caribou", "Cassowary", "Cat", "Caterpillar", "Cattle", "Chamois",
    "Cheetah", "Chicken", "Chimpanzee", "Chinchilla", "Chough", "Clam", "Cobra", "Cod",
    "Cormorant", "Coyote", "Crab", "Crane", "Crocodile", "Crow", "Curlew", "Deer", "Dinosaur",
    "Dogfish", "Dolphin", "Dotterel", "Dove", "Dragonfly", "Duck", "Dugong", "Dunlin", "Eagle",
    "Echidna", "Eel", "Eland", "Elephant", "Elk", "Emu", "Falcon", "Ferret", "Finch", "Fish",
    "Flamingo", "Fox", "Frog", "Gaur", "Gazelle", "Gerbil", "Giraffe", "Gnat", "Gnu", "Goat",
    "Goldfinch", "Goldfish", "Goose", "Gorilla", "Goshawk", "Grasshopper", "Grouse", "Guanaco",
    "Gull", "Hamster", "Hare", "Hawk", "Hedgehog", "Heron", "Herring", "Hippopotamus", "Hornet",
    "Horse", "Human", "Hummingbird", "Hyena", "Ibex", "Ibis", "Jackal", "Jaguar", "Jay",
    "Jellyfish", "Kangaroo", "Kingfisher", "Koala", "Kookabura", "Kouprey", "Kudu", "Lapwing",
    "Lark", "Lemur", "Leopard", "Lion", "Llama", "Lobster", "Loris", "Louse", "Lyrebird", "Magpie",
    "Mallard", "Manatee", "Mandrill", "Mantis", "Marten", "Meerkat", "Mink", "Mole", "Mongoose",
    "Monkey", "Moose", "Mouse", "Mule", "Narwhal", "Newt", "Nightingale", "Octopus", "Okapi",
    "Opossum", "Oryx", "Ostrich", "Otter", "Owl", "Oyster", "Panther", "Parrot", "Partridge",
    "Peafowl", "Pelican", "Penguin", "Pheasant", "Pig", "Pigeon", "Pony", "Porcupine", "Porpoise",
    "Quail", "Quelea", "Quetzal", "Rabbit", "Raccoon", "Rail", "Ram", "Red deer", "Red panda",
    "Reindeer", "Rhinoceros", "Rook", "Salamander", "Salmon", "Sand Dollar", "Sandpiper",
    "Sardine", "Scorpion", "Seahorse", "Seal", "Shark", "Sheep", "Shrew", "Skunk", "Snail",
    "Snake", "Sparrow", "Spider", "Spoonbill", "Squid", "Squirrel", "Starling", "Stingray",
    "Stork", "Swallow", "Swan", "Tapir", "Tarsier", "Tiger", "Toad", "Trout", "Turkey", "Turtle",
    "Viper", "Vulture", "Wallaby", "Walrus", "Weasel", "Whale", "Wildcat", "Wolf", "Wolverine",
    "Wombat", "Woodpecker", "Wren", "Yak", "Zebra",
];

/// Base avatar colors.
pub static PRIMARY_COLORS: [&str; PALETTE_LEN] = [
    "#ef4444", "#f97316", "#f59e0b", "#84cc16", "#10b981",
    "#06b6d4", "#3b82f6", "#8b5cf6", "#d946ef", "#f43f5e",
];

/// Darker companions of [`PRIMARY_COLORS`]; entry `i` pairs with entry `i`.
pub static SECONDARY_COLORS: [&str; PALETTE_LEN] = [
    "#b91c1c", "#c2410c", "#b45309", "#4d7c0f", "#047857",
    "#0e7490", "#1d4ed8", "#6d28d9", "#a21caf", "#be123c",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn name_table_has_no_duplicates() {
        let unique: HashSet<&str> = NAMES.iter().copied().collect();
        assert_eq!(unique.len(), NAMES.len());
        assert!(NAMES.len() >= 200);
    }

    #[test]
    fn name_table_is_pinned() {
        // Anchors at both ends and in the middle; a reorder shifts at least one.
        assert_eq!(NAMES[0], "Aardvark");
        assert_eq!(NAMES[116], "Mallard");
        assert_eq!(NAMES[NAMES.len() - 1], "Zebra");
    }

    #[test]
    fn palettes_are_hex_colors() {
        for color in PRIMARY_COLORS.iter().chain(SECONDARY_COLORS.iter()) {
            assert_eq!(color.len(), 7, "bad color {color}");
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn palette_pairs_differ() {
        for (primary, secondary) in PRIMARY_COLORS.iter().zip(SECONDARY_COLORS.iter()) {
            assert_ne!(primary, secondary);
        }
    }
}
