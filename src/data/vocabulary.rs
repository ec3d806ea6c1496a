//! Embedded reference tables: condition-symptom sets, symptom aliases,
//! synonym and descriptor lists for augmentation, the intent corpus, and
//! conversation trigger/template tables.
//!
//! All tables are read-only seed data; `KnowledgeBase::build` turns them
//! into the immutable runtime structures.

use crate::chat::classify::ConversationType;

/// Condition label paired with its associated symptom set.
pub const CONDITIONS: &[(&str, &[&str])] = &[
    (
        "Common Cold",
        &[
            "runny nose",
            "sneezing",
            "cough",
            "sore throat",
            "headache",
            "mild fever",
        ],
    ),
    (
        "Influenza (Flu)",
        &[
            "high fever",
            "body aches",
            "fatigue",
            "headache",
            "cough",
            "sore throat",
        ],
    ),
    (
        "COVID-19",
        &[
            "fever",
            "dry cough",
            "fatigue",
            "loss of taste",
            "loss of smell",
            "shortness of breath",
        ],
    ),
    (
        "Migraine",
        &[
            "severe headache",
            "sensitivity to light",
            "nausea",
            "vomiting",
        ],
    ),
    (
        "Allergic Rhinitis",
        &["sneezing", "runny nose", "itchy eyes", "congestion"],
    ),
];

/// Common misspellings and alternate phrasings, canonical symptom first.
pub const SYMPTOM_ALIASES: &[(&str, &[&str])] = &[
    (
        "headache",
        &["head ache", "headach", "head pain", "migrane", "migranes"],
    ),
    ("fever", &["high temperature", "febril", "feaver", "hot"]),
    ("cough", &["coughing", "caugh", "coff"]),
    (
        "fatigue",
        &["tired", "tiredness", "exhaustion", "no energy"],
    ),
    (
        "sore throat",
        &["throat pain", "painful throat", "throat hurts"],
    ),
    (
        "runny nose",
        &["runny noze", "nose running", "drippy nose"],
    ),
    (
        "shortness of breath",
        &["can't breathe", "difficulty breathing", "hard to breathe"],
    ),
    (
        "nausea",
        &["feel sick", "want to vomit", "queasy", "nauseated"],
    ),
    ("vomiting", &["throwing up", "puking", "vomit"]),
    ("diarrhea", &["diarrhoea", "loose stool", "watery stool"]),
];

/// Per-word synonym dictionary used by the synonym-substitution transform.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "headache",
        &[
            "head pain",
            "migraine",
            "head discomfort",
            "skull pain",
            "cranial pain",
        ],
    ),
    (
        "fever",
        &[
            "elevated temperature",
            "high temperature",
            "hyperthermia",
            "pyrexia",
            "febrile",
        ],
    ),
    (
        "cough",
        &["coughing", "hack", "throat clearing", "respiratory spasm"],
    ),
    (
        "fatigue",
        &[
            "tiredness",
            "exhaustion",
            "lethargy",
            "weariness",
            "lack of energy",
        ],
    ),
    (
        "sore throat",
        &[
            "throat pain",
            "pharyngitis",
            "throat irritation",
            "painful swallowing",
        ],
    ),
    (
        "runny nose",
        &[
            "nasal discharge",
            "rhinorrhea",
            "nasal drip",
            "nasal secretion",
        ],
    ),
    (
        "shortness of breath",
        &[
            "dyspnea",
            "breathlessness",
            "respiratory distress",
            "difficulty breathing",
        ],
    ),
    (
        "nausea",
        &[
            "queasiness",
            "sickness",
            "upset stomach",
            "stomach discomfort",
        ],
    ),
    (
        "vomiting",
        &["emesis", "throwing up", "regurgitation", "gastric emptying"],
    ),
    (
        "diarrhea",
        &[
            "loose stool",
            "watery stool",
            "bowel urgency",
            "frequent defecation",
        ],
    ),
    (
        "pain",
        &["discomfort", "ache", "soreness", "distress", "suffering"],
    ),
    (
        "itching",
        &["pruritus", "itchiness", "irritation", "scratchy sensation"],
    ),
    (
        "rash",
        &["skin eruption", "dermatitis", "hives", "skin irritation"],
    ),
    (
        "dizziness",
        &["vertigo", "lightheadedness", "faintness", "giddiness"],
    ),
    (
        "swelling",
        &["edema", "inflammation", "distension", "puffiness"],
    ),
];

/// Severity/duration descriptors for the random-insertion transform.
pub const DESCRIPTORS: &[&str] = &[
    "severe",
    "mild",
    "constant",
    "occasional",
    "intense",
    "sharp",
    "dull",
    "chronic",
    "acute",
    "persistent",
    "intermittent",
    "recurring",
    "sudden",
];

/// Intent corpus: tag, example patterns, candidate responses.
pub const INTENTS: &[(&str, &[&str], &[&str])] = &[
    (
        "cold",
        &["I have a runny nose", "Sneezing a lot", "My nose is blocked"],
        &[
            "You may have a common cold. Try steam inhalation and stay warm.",
            "Over-the-counter meds like Cetirizine or Paracetamol may help.",
            "Do you also have a fever or sore throat?",
        ],
    ),
    (
        "flu",
        &["High fever", "Body ache and chills", "Cough and sore throat"],
        &[
            "Sounds like flu. Rest well, drink warm fluids, and take paracetamol.",
            "If symptoms worsen, antiviral drugs like Oseltamivir may be prescribed.",
            "Are you experiencing breathlessness or chest pain as well?",
        ],
    ),
    (
        "covid",
        &[
            "Loss of taste",
            "Shortness of breath",
            "Dry cough",
            "COVID symptoms",
        ],
        &[
            "These could be COVID-19 symptoms. Please isolate and get tested.",
            "Take antipyretics, stay hydrated, and monitor oxygen levels.",
            "Have you been vaccinated or tested recently?",
        ],
    ),
    (
        "malaria",
        &[
            "Chills and shivering",
            "Fever that comes and goes",
            "Muscle pain",
            "Sweating",
        ],
        &[
            "You may have malaria. A blood test will confirm the diagnosis.",
            "Start taking prescribed anti-malarials like Artemisinin combination therapy (ACT).",
            "Are you experiencing nausea or vomiting as well?",
        ],
    ),
    (
        "typhoid",
        &[
            "High fever for days",
            "Abdominal pain",
            "Feeling very weak",
            "Constipation or diarrhea",
        ],
        &[
            "You could have typhoid. A Widal test is suggested.",
            "Ciprofloxacin or Cefixime may be prescribed based on severity.",
            "Is the fever persistent or fluctuating?",
        ],
    ),
    (
        "migraine",
        &[
            "Throbbing headache",
            "Pain on one side",
            "Light sensitivity",
            "Aura before headache",
        ],
        &[
            "Sounds like a migraine. Rest in a quiet dark room and avoid screen time.",
            "You can try medications like Sumatriptan or Naproxen.",
            "Do you also experience nausea or blurred vision?",
        ],
    ),
    (
        "asthma",
        &[
            "Wheezing",
            "Chest tightness",
            "Shortness of breath",
            "Difficulty in breathing",
        ],
        &[
            "This may be asthma. Avoid dusty environments and known allergens.",
            "Use prescribed inhalers like Salbutamol during attacks.",
            "Do you have a history of asthma or allergies?",
        ],
    ),
    (
        "dengue",
        &[
            "Severe body pain",
            "High fever",
            "Rashes",
            "Bleeding gums",
            "Low platelet count",
        ],
        &[
            "Dengue might be the issue. Avoid aspirin and get platelet count checked regularly.",
            "Use paracetamol for fever, rest well, and stay hydrated with ORS.",
            "Have you noticed any bleeding or bruising?",
        ],
    ),
    (
        "depression",
        &[
            "Feeling low",
            "No energy",
            "Hopelessness",
            "I can't sleep",
            "Loss of interest",
        ],
        &[
            "You might be experiencing depression. Talk to a mental health professional.",
            "SSRIs like Sertraline or CBT therapy might help. Avoid self-diagnosing.",
            "Have these feelings been constant for more than 2 weeks?",
        ],
    ),
    (
        "acidity",
        &["Heartburn", "Acid reflux", "Burning in chest after food"],
        &[
            "This could be acidity. Avoid spicy foods and eat smaller meals.",
            "Antacids like Pantoprazole or Ranitidine may help.",
            "Do you also experience bloating or burping?",
        ],
    ),
    (
        "ulcer",
        &[
            "Stomach pain",
            "Pain after eating",
            "Nausea",
            "Frequent burping",
        ],
        &[
            "Possible peptic ulcer. A gastroscopy can confirm it.",
            "Take antacids or PPIs like Omeprazole after doctor's advice.",
            "Are you taking any painkillers frequently?",
        ],
    ),
    (
        "healthy",
        &["I'm fine", "I feel good", "No health issues"],
        &[
            "That's great! Stay hydrated, eat well, and do regular checkups.",
            "Happy to hear you're feeling well! Would you like health tips?",
        ],
    ),
];

/// Conversation trigger substrings, walked in this order by the classifier.
pub const CONVERSATION_TRIGGERS: &[(ConversationType, &[&str])] = &[
    (
        ConversationType::Greeting,
        &[
            "hi",
            "hello",
            "hey",
            "hi there",
            "hello there",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
            "howdy",
            "sup",
            "what's up",
        ],
    ),
    (
        ConversationType::SmallTalk,
        &[
            "how are you",
            "how's it going",
            "what's up",
            "how are you doing",
            "how do you feel",
            "how is your day",
            "how's your day",
        ],
    ),
    (
        ConversationType::AboutBot,
        &[
            "who are you",
            "what are you",
            "are you a doctor",
            "are you an ai",
            "what can you do",
            "tell me about yourself",
            "your name",
            "what's your name",
            "what are you capable of",
            "what should i call you",
        ],
    ),
    (
        ConversationType::HowItWorks,
        &[
            "how do you work",
            "how accurate are you",
            "how do you know",
            "how do you predict",
            "how do you identify",
            "how reliable are you",
        ],
    ),
    (
        ConversationType::Help,
        &[
            "help",
            "i need help",
            "can you help me",
            "assist me",
            "i need assistance",
            "i feel sick",
            "i don't feel well",
            "feeling sick",
            "need doctor",
            "medical help",
            "medical advice",
            "health concern",
        ],
    ),
    (
        ConversationType::ThankYou,
        &[
            "thanks",
            "thank you",
            "appreciate it",
            "thank",
            "thanks a lot",
            "thank you very much",
            "grateful",
            "you're helpful",
        ],
    ),
    (
        ConversationType::Exit,
        &[
            "bye",
            "goodbye",
            "see you",
            "talk later",
            "exit",
            "quit",
            "leave",
            "end",
            "finish",
            "stop",
            "that's all",
        ],
    ),
];

/// Fixed reply templates per conversation bucket.
pub const CONVERSATION_RESPONSES: &[(ConversationType, &[&str])] = &[
    (
        ConversationType::Greeting,
        &[
            "Hello! How are you feeling today?",
            "Hi there! How can I help with your health concerns today?",
            "Hey! I'm here to help with any health questions. How are you?",
        ],
    ),
    (
        ConversationType::SmallTalk,
        &[
            "I'm doing great, thanks for asking! How are you feeling today?",
            "I'm well, thanks! More importantly, how are you doing?",
            "All good on my end! I'm here and ready to help with any health concerns.",
        ],
    ),
    (
        ConversationType::AboutBot,
        &[
            "I'm your friendly health assistant. I help people understand symptoms and guide them toward possible conditions. How can I help you today?",
            "I'm a health assistant designed to help with symptom analysis and provide general health information. I'm not a doctor, but I can give you helpful insights about your health concerns.",
        ],
    ),
    (
        ConversationType::HowItWorks,
        &[
            "I analyze the symptoms you describe and compare them to a database of conditions. My matcher predicts possible matches, but remember I'm not a substitute for professional medical advice.",
            "I use text matching to identify symptoms in what you tell me, then match those to known conditions. My predictions are just to help guide you - always consult a healthcare provider for proper diagnosis.",
        ],
    ),
    (
        ConversationType::Help,
        &[
            "I'm here to help! Could you describe what you're experiencing? Even small details about your symptoms can be useful.",
            "I'd be happy to assist you. What symptoms are you experiencing? The more details you can share, the better I can help.",
        ],
    ),
    (
        ConversationType::ThankYou,
        &[
            "You're welcome! I'm always here if you need help with health questions.",
            "Happy to help! Is there anything else you'd like to know?",
            "Anytime! Your health matters, and I'm here whenever you need assistance.",
        ],
    ),
    (
        ConversationType::Exit,
        &[
            "Take care! Feel free to come back if you have any health questions.",
            "Goodbye! Wishing you the best of health. I'm here whenever you need assistance.",
            "See you later! Remember, I'm always here if you need health guidance.",
        ],
    ),
];
