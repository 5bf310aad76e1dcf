//! Word list for [`crate::seed::RandomSeed`]: 256 entries, one per byte value.

pub(crate) const WORDLIST: [&str; 256] = [
    "acid", "actor", "adapt", "admit", "adult", "agent", "aisle", "alarm", "album", "alert",
    "alley", "alpha", "amber", "anchor", "angle", "ankle", "apple", "april", "arena", "armor",
    "arrow", "artist", "atlas", "audit", "autumn", "avocado", "awake", "axis", "bacon", "badge",
    "bagel", "baker", "bamboo", "banana", "banner", "barrel", "basket", "beach", "beacon", "bean",
    "bench", "berry", "bicycle", "bird", "blanket", "blossom", "board", "boat", "bonus", "book",
    "border", "bottle", "bracket", "brave", "bread", "breeze", "brick", "bridge", "bronze",
    "brush", "bubble", "bucket", "buffalo", "butter", "cabin", "cable", "cactus", "camel",
    "camera", "canal", "candle", "canyon", "carbon", "cargo", "carpet", "castle", "cedar",
    "cement", "chair", "chalk", "cherry", "chess", "chimney", "cinema", "circle", "citrus",
    "civic", "clay", "cliff", "clock", "cloud", "clover", "coast", "cobalt", "coconut", "comet",
    "copper", "coral", "cotton", "couch", "crane", "crater", "cricket", "crystal", "cube",
    "curtain", "cycle", "daisy", "dawn", "delta", "desert", "diamond", "dinner", "dolphin",
    "domain", "donkey", "dragon", "drift", "drum", "eagle", "earth", "echo", "eclipse", "elbow",
    "ember", "engine", "equal", "falcon", "fabric", "feather", "fence", "fern", "festival",
    "fiber", "field", "flame", "flute", "forest", "fossil", "fountain", "fox", "frost", "galaxy",
    "garden", "garlic", "gate", "gecko", "giant", "ginger", "glacier", "globe", "glove", "goose",
    "granite", "grape", "gravel", "guitar", "hammer", "harbor", "harvest", "hazel", "helmet",
    "heron", "hollow", "honey", "horizon", "humble", "island", "ivory", "jacket", "jaguar",
    "jasmine", "jelly", "jungle", "kayak", "kettle", "kiwi", "ladder", "lagoon", "lantern",
    "laser", "lemon", "lentil", "library", "lilac", "linen", "lizard", "lobster", "magnet",
    "mango", "maple", "marble", "meadow", "melon", "meteor", "mirror", "mosaic", "motor",
    "mountain", "muffin", "museum", "napkin", "nectar", "needle", "nickel", "noble", "noodle",
    "novel", "oasis", "ocean", "olive", "onion", "opera", "orbit", "orchid", "otter", "oyster",
    "paddle", "palace", "panda", "paper", "parrot", "pebble", "pepper", "piano", "pigeon",
    "pillow", "pine", "planet", "plaza", "pocket", "polar", "pony", "poppy", "prism", "pumpkin",
    "puzzle", "quartz", "quill", "rabbit", "radar", "raven", "reef", "ribbon", "river", "robin",
    "rocket", "rose", "saddle", "salmon", "satin", "scarf", "shadow", "shell", "silver", "sketch",
];
