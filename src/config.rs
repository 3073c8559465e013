/// Letters offered on the keyboard, in display order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "ENDGAME_LOG";

/// Sampling temperature for AI suggestions. Lower values favour the most
/// likely letter.
pub const AI_TEMPERATURE: f64 = 0.5;

/// `(name, background color, text color)` for the standard roster. The last
/// entry is the one the player is protecting.
pub const STANDARD_LANGUAGES: [(&str, &str, &str); 9] = [
    ("HTML", "#E2680F", "#F9F4DA"),
    ("CSS", "#328AF1", "#F9F4DA"),
    ("JavaScript", "#F4EB13", "#1E1E1E"),
    ("React", "#2ED3E9", "#1E1E1E"),
    ("TypeScript", "#298EC6", "#F9F4DA"),
    ("Node.js", "#599137", "#F9F4DA"),
    ("Python", "#FFD742", "#1E1E1E"),
    ("Ruby", "#D02B2B", "#F9F4DA"),
    ("Assembly", "#2D519F", "#F9F4DA"),
];

/// Flavor messages shown after a wrong guess; `{}` is the eliminated language.
pub const FAREWELL_TEMPLATES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Built-in secret words.
pub const BUILTIN_WORDS: &[&str] = &[
    "about", "account", "across", "addition", "adjustment", "advertisement",
    "agreement", "almost", "among", "attack", "attempt", "attention",
    "attraction", "authority", "balance", "base", "behavior", "belief",
    "birth", "bitter", "boiling", "brain", "brake", "branch", "breath",
    "brick", "bridge", "broken", "brother", "brush", "bucket", "building",
    "butter", "button", "camera", "canvas", "carriage", "cause", "chain",
    "chalk", "chance", "change", "cheese", "chemical", "chest", "chief",
    "church", "circle", "clean", "clear", "clock", "cloth", "cloud",
    "collar", "colour", "comfort", "committee", "common", "company",
    "comparison", "competition", "complete", "complex", "condition",
    "connection", "conscious", "control", "copper", "cotton", "country",
    "cover", "crack", "credit", "crime", "cruel", "crush", "current",
    "curtain", "curve", "cushion", "damage", "danger", "daughter",
    "decision", "degree", "delicate", "dependent", "design", "desire",
    "destruction", "detail", "development", "different", "digestion",
    "direction", "discovery", "discussion", "disease", "disgust",
    "distance", "distribution", "division", "drawer", "dress", "driving",
    "early", "education", "effect", "elastic", "electric", "engine",
    "equal", "error", "event", "every", "example", "exchange", "existence",
    "expansion", "experience", "expert", "fact", "false", "family",
    "father", "feather", "feeble", "feeling", "female", "fertile",
    "fiction", "field", "fight", "finger", "flame", "flight", "flower",
    "force", "forward", "frame", "frequent", "friend", "front", "fruit",
    "future", "garden", "general", "glove", "government", "grain", "grass",
    "great", "green", "group", "growth", "guide", "hammer", "harbor",
    "harmony", "healthy", "hearing", "history", "hollow", "hospital",
    "humor", "important", "impulse", "increase", "industry", "insect",
    "instrument", "insurance", "interest", "invention", "island", "jelly",
    "jewel", "journey", "judge", "kettle", "knife", "knowledge", "language",
    "learning", "leather", "letter", "level", "library", "light", "limit",
    "linen", "liquid", "machine", "manager", "market", "married", "material",
    "meeting", "memory", "metal", "middle", "military", "minute", "mixed",
    "money", "monkey", "morning", "mother", "motion", "mountain", "muscle",
    "music", "narrow", "nation", "natural", "necessary", "needle", "nerve",
    "network", "number", "observation", "office", "operation", "opinion",
    "opposite", "orange", "order", "organization", "ornament", "oven",
    "owner", "parallel", "parcel", "pencil", "person", "physical", "picture",
    "pocket", "poison", "polish", "political", "porter", "position",
    "potato", "powder", "present", "prison", "private", "probable",
    "process", "produce", "profit", "program", "property", "protest",
    "public", "purpose", "quality", "question", "quiet", "rail", "range",
    "reaction", "reading", "reason", "receipt", "record", "regret",
    "regular", "relation", "religion", "request", "respect", "reward",
    "rhythm", "river", "science", "scissors", "screw", "secret",
    "secretary", "selection", "sentence", "servant", "shadow", "shelf",
    "signal", "silver", "simple", "sister", "skirt", "smash", "society",
    "square", "station", "steam", "stitch", "stocking", "stomach", "strange",
    "street", "stretch", "string", "structure", "substance", "sudden",
    "sugar", "suggestion", "summer", "support", "surprise", "system",
    "theory", "thought", "thread", "thunder", "ticket", "tomorrow",
    "tongue", "towel", "trade", "transport", "trouble", "twist", "umbrella",
    "value", "vessel", "violent", "voice", "waiting", "weather", "whistle",
    "window", "winter", "woman", "wound", "writing", "yellow", "yesterday",
];
