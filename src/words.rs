pub const MIN_WORD_LEN: usize = 5;
pub const MAX_WORD_LEN: usize = 8;

pub const HANGMAN_WORDS: &[&str] = &[
    "anchor", "badger", "banjo", "barrel", "beacon", "blanket", "bramble", "bridge",
    "bucket", "cabinet", "candle", "canyon", "carpet", "castle", "cactus", "chimney",
    "cobalt", "compass", "copper", "crayon", "dragon", "drizzle", "falcon", "feather",
    "fossil", "garden", "glacier", "goblin", "granite", "harbor", "harvest", "helmet",
    "hollow", "island", "jacket", "jigsaw", "kettle", "lantern", "lemon", "locket",
    "magnet", "maple", "marble", "meadow", "mirror", "monkey", "muffin", "needle",
    "noodle", "orchard", "oyster", "paddle", "parrot", "pebble", "pepper", "pickle",
    "pillow", "planet", "pocket", "puzzle", "quiver", "rabbit", "rocket", "saddle",
    "salmon", "shadow", "silver", "spider", "spinach", "sponge", "squash", "stable",
    "sunset", "teapot", "thunder", "timber", "tomato", "trumpet", "tunnel", "turtle",
    "velvet", "violin", "walnut", "whisker", "willow", "window", "winter", "wizard",
    "yogurt", "zipper",
];
