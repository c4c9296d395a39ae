//! Canonical replacement tables, one per tone, shared by the local engine
//! and anything else that needs to know what a tone does.
//!
//! Each rule pairs a compiled case-insensitive matcher with a non-empty
//! candidate list; the transformer draws one candidate per match. Rules run
//! in declaration order over the cumulative text, so later rules see the
//! output of earlier ones.

use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::Tone;

/// Structural edit applied after the table-driven pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralEdit {
    /// No edit beyond the shared lexical pass.
    None,
    /// Cap long sentences and re-terminate each with a period.
    CapSentences,
    /// Replace terminal sentence periods with exclamation marks.
    ExclaimTerminals,
}

/// One pattern together with its replacement candidates.
#[derive(Debug)]
pub struct ToneRule {
    pattern: Regex,
    candidates: &'static [&'static str],
}

impl ToneRule {
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn candidates(&self) -> &'static [&'static str] {
        self.candidates
    }
}

/// Ordered rule table plus the tone's structural edit.
#[derive(Debug)]
pub struct ToneProfile {
    tone: Tone,
    rules: Vec<ToneRule>,
    structure: StructuralEdit,
}

impl ToneProfile {
    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn rules(&self) -> &[ToneRule] {
        &self.rules
    }

    pub fn structure(&self) -> StructuralEdit {
        self.structure
    }
}

/// Look up the static profile for a tone.
pub fn profile_for(tone: Tone) -> &'static ToneProfile {
    match tone {
        Tone::Formal => &FORMAL,
        Tone::Friendly => &FRIENDLY,
        Tone::Concise => &CONCISE,
        Tone::Persuasive => &PERSUASIVE,
        Tone::Creative => &CREATIVE,
    }
}

/// Compile a whole-word, case-insensitive rule. Patterns are regex fragments,
/// so alternations like `"hey|hi"` fold several triggers into one rule.
fn rule(fragment: &str, candidates: &'static [&'static str]) -> ToneRule {
    assert!(!candidates.is_empty(), "rule needs at least one candidate");
    ToneRule {
        pattern: Regex::new(&format!(r"(?i)\b(?:{fragment})\b")).expect("valid tone rule pattern"),
        candidates,
    }
}

static FORMAL: Lazy<ToneProfile> = Lazy::new(|| ToneProfile {
    tone: Tone::Formal,
    structure: StructuralEdit::None,
    rules: vec![
        // Slang contractions first so later single-word rules see clean text.
        rule("gonna", &["going to", "will", "intend to"]),
        rule("wanna", &["want to", "would like to", "wish to"]),
        rule("gotta", &["have to", "must", "need to"]),
        rule("dunno", &["do not know", "am not certain"]),
        rule("ain't", &["is not", "are not", "am not"]),
        rule("yeah", &["yes", "indeed", "certainly"]),
        rule("nope", &["no", "certainly not"]),
        rule("hey|hi", &["hello", "greetings"]),
        rule("thanks", &["thank you", "I appreciate it", "I am grateful"]),
        rule("sorry", &["I apologize", "I regret"]),
        rule("a lot", &["substantially", "considerably", "significantly"]),
        rule("sort of|kind of", &["somewhat", "rather", "to some extent"]),
        rule("stuff", &["items", "materials", "components"]),
        rule("things", &["matters", "aspects", "factors"]),
        rule("really", &["quite", "considerably", "substantially"]),
        rule("very", &["exceedingly", "remarkably", "notably"]),
        rule("totally", &["completely", "entirely", "thoroughly"]),
        rule("awesome", &["excellent", "commendable", "impressive"]),
        rule("great", &["excellent", "exceptional", "outstanding"]),
        rule("cool", &["impressive", "admirable", "noteworthy"]),
        rule("need to", &["require", "find it necessary to"]),
        rule("tell", &["inform", "advise"]),
        rule("ask", &["inquire", "request"]),
        rule("get", &["obtain", "acquire", "procure"]),
        rule("big", &["substantial", "significant", "considerable"]),
        rule("small", &["minimal", "modest", "limited"]),
        rule("good", &["satisfactory", "advantageous", "beneficial", "favorable"]),
        rule("bad", &["unsatisfactory", "unfavorable", "problematic", "detrimental"]),
        rule("happy", &["pleased", "gratified", "content"]),
        rule("sad", &["disappointed", "disheartened", "discouraged"]),
        rule("worried", &["concerned", "apprehensive", "troubled"]),
    ],
});

static FRIENDLY: Lazy<ToneProfile> = Lazy::new(|| ToneProfile {
    tone: Tone::Friendly,
    structure: StructuralEdit::None,
    rules: vec![
        rule("hello", &["hey there", "hi there", "hey"]),
        rule("thank you", &["thanks a bunch", "thanks so much", "really appreciate it"]),
        rule("important", &["super important", "really important", "crucial"]),
        rule("good", &["awesome", "fantastic", "great", "lovely"]),
        rule("great", &["amazing", "fantastic", "awesome"]),
        rule("interesting", &["fascinating", "cool", "intriguing", "neat"]),
        rule("I think", &["I feel", "from my perspective"]),
        rule("difficult", &["tricky", "not easy", "challenging"]),
        rule("problem", &["issue", "hiccup", "challenge"]),
        rule("very", &["super", "really", "totally"]),
        rule("extremely", &["incredibly", "absolutely", "completely"]),
        rule("in addition", &["also", "plus", "on top of that"]),
        rule("however", &["but", "though", "still"]),
        rule("therefore", &["so", "that's why", "which means"]),
        rule("consequently", &["so", "which means", "as a result"]),
        rule("implement", &["put in place", "use", "try out"]),
        rule("obtain", &["get", "grab", "pick up"]),
        rule("purchase", &["buy", "get", "pick up"]),
        rule("sufficient", &["enough", "plenty"]),
        rule("frequently", &["often", "a lot"]),
        rule("rarely", &["hardly ever", "almost never"]),
        rule("assistance", &["help", "a hand", "support"]),
        rule("attempt", &["try", "have a go", "take a shot"]),
        rule("communicate", &["talk", "chat", "reach out"]),
        rule("inquire", &["ask", "wonder"]),
        rule("proceed", &["go ahead", "move forward", "carry on"]),
        rule("comprehend", &["get it", "understand"]),
    ],
});

static CONCISE: Lazy<ToneProfile> = Lazy::new(|| ToneProfile {
    tone: Tone::Concise,
    structure: StructuralEdit::CapSentences,
    rules: vec![
        rule("in order to", &["to"]),
        rule("for the purpose of", &["to", "for"]),
        rule("due to the fact that", &["because", "since", "as"]),
        rule("in spite of the fact that", &["although", "despite"]),
        rule("with regard to", &["about", "regarding"]),
        rule("in the event that", &["if", "when"]),
        rule("at this point in time", &["now", "currently"]),
        rule("it is important to note that", &["note that", "notably"]),
        rule("take into consideration", &["consider"]),
        rule("a large number of", &["many", "numerous"]),
        rule("a majority of", &["most", "many"]),
        rule("at the present time", &["now", "currently", "today"]),
        rule("in the near future", &["soon", "shortly"]),
        rule("absolutely essential", &["essential", "vital"]),
        rule("end result", &["result", "outcome"]),
        rule("final outcome", &["outcome", "result"]),
        rule("past history", &["history", "background"]),
        rule("make a decision", &["decide", "choose"]),
        rule("provide assistance to", &["help", "assist"]),
        rule("give consideration to", &["consider"]),
        rule("as a matter of fact", &["in fact", "indeed"]),
        rule("at the end of the day", &["ultimately", "finally"]),
        rule("for all intents and purposes", &["essentially", "practically"]),
        rule("each and every", &["each", "every", "all"]),
        rule("various different", &["various", "different"]),
        rule("first and foremost", &["first", "primarily"]),
        rule("it can be seen that", &["clearly", "evidently"]),
        rule("it should be noted that", &["note that", "notably"]),
        rule("in my opinion", &["I think", "I believe"]),
        rule("on account of", &["because", "since"]),
        rule("in addition to", &["besides", "also", "plus"]),
        rule("as a result of", &["because", "due to"]),
        rule("with the exception of", &["except", "excluding"]),
        rule("in conjunction with", &["with", "alongside"]),
        rule("in close proximity to", &["near", "close to"]),
        rule("on a regular basis", &["regularly", "often"]),
    ],
});

static PERSUASIVE: Lazy<ToneProfile> = Lazy::new(|| ToneProfile {
    tone: Tone::Persuasive,
    structure: StructuralEdit::ExclaimTerminals,
    rules: vec![
        // Multi-word assertions before the single words they contain.
        rule("I think", &["I firmly believe", "I am convinced", "I am certain"]),
        rule("I believe", &["I am confident", "I am convinced"]),
        rule("good", &["excellent", "outstanding", "exceptional", "remarkable"]),
        rule("nice", &["outstanding", "excellent", "impressive"]),
        rule("important", &["crucial", "essential", "critical", "vital"]),
        rule("helpful|useful", &["invaluable", "essential", "indispensable"]),
        rule("should", &["must", "need to"]),
        rule("could", &["can definitely", "will be able to"]),
        rule("might", &["will likely", "can certainly"]),
        rule("consider", &["seriously consider", "make it a priority to"]),
        rule("try", &["commit to", "embrace"]),
        rule("soon", &["immediately", "right now", "without delay"]),
        rule("eventually", &["very soon", "imminently"]),
        rule("also", &["furthermore", "moreover", "what's more"]),
        rule("probably", &["certainly", "definitely", "unquestionably"]),
        rule("maybe", &["most assuredly", "without a doubt"]),
        rule("possibly", &["almost certainly", "very likely"]),
        rule("improve", &["transform", "revolutionize", "elevate"]),
        rule("increase", &["dramatically boost", "multiply", "amplify"]),
        rule("change", &["transform", "revolutionize", "reinvent"]),
        rule("new", &["innovative", "pioneering", "cutting-edge"]),
        rule("problem", &["challenge", "obstacle", "hurdle"]),
        rule("solution", &["answer", "remedy", "breakthrough"]),
        rule("opportunity", &["golden opportunity", "rare chance"]),
        rule("easy", &["effortless", "straightforward"]),
        rule("fast", &["rapid", "swift", "immediate"]),
        rule("safe", &["secure", "protected", "guaranteed"]),
        rule("begin", &["embark on", "launch", "commence"]),
        rule("find", &["discover", "uncover", "identify"]),
        rule("create", &["craft", "forge", "build"]),
        rule("ensure", &["guarantee", "secure", "safeguard"]),
    ],
});

static CREATIVE: Lazy<ToneProfile> = Lazy::new(|| ToneProfile {
    tone: Tone::Creative,
    structure: StructuralEdit::None,
    rules: vec![
        rule("went", &["ventured", "journeyed", "wandered", "drifted"]),
        rule("said", &["whispered", "declared", "proclaimed"]),
        rule("beautiful", &["breathtaking", "mesmerizing", "enchanting"]),
        rule("good", &["extraordinary", "magnificent", "splendid", "marvelous"]),
        rule("bad", &["dreadful", "lamentable", "woeful"]),
        rule("big", &["colossal", "monumental", "towering"]),
        rule("small", &["miniature", "diminutive", "petite"]),
        rule("walk", &["stroll", "saunter", "meander"]),
        rule("run", &["dash", "sprint", "race"]),
        rule("look", &["gaze", "peer", "behold"]),
        rule("see", &["witness", "behold", "observe"]),
        rule("loud", &["thunderous", "deafening", "booming"]),
        rule("quiet", &["hushed", "muted", "tranquil"]),
        rule("bright", &["radiant", "luminous", "dazzling"]),
        rule("dark", &["shadowy", "enigmatic", "dusky"]),
        rule("soft", &["velvety", "silky", "gossamer"]),
        rule("fast", &["swift as an arrow", "quick as lightning"]),
        rule("slow", &["languid as honey", "unhurried as a cloud"]),
        rule("happy", &["joyful as a songbird", "elated", "jubilant"]),
        rule("sad", &["melancholy as autumn rain", "forlorn", "wistful"]),
        rule("water", &["crystalline depths", "liquid silver"]),
        rule("sky", &["celestial canvas", "azure expanse"]),
        rule("love", &["profound adoration", "boundless affection"]),
        rule("fear", &["primal dread", "chilling apprehension"]),
        rule("hope", &["radiant possibility", "shimmering promise"]),
        rule("sound", &["melody", "rhythm", "cadence"]),
        rule("move", &["dance", "flow", "glide"]),
        rule("speak", &["articulate", "voice", "convey"]),
        rule("think", &["contemplate", "ponder", "muse"]),
        rule("night", &["velvet darkness", "starlit realm"]),
        rule("idea", &["illuminating concept", "intellectual spark"]),
        rule("dream", &["nocturnal vision", "slumbering fantasy"]),
        rule("memory", &["echoing recollection", "mental imprint"]),
        rule("old", &["ancient", "venerable", "timeworn", "weathered"]),
        rule("new", &["nascent", "newborn", "pristine"]),
        rule("start", &["genesis", "inception", "dawn"]),
        rule("end", &["culmination", "finale", "denouement"]),
        rule("change", &["metamorphosis", "transformation", "evolution"]),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_has_a_populated_profile() {
        for tone in Tone::ALL {
            let profile = profile_for(tone);
            assert_eq!(profile.tone(), tone);
            assert!(!profile.rules().is_empty(), "{} has no rules", tone.label());
            for rule in profile.rules() {
                assert!(!rule.candidates().is_empty());
            }
        }
    }

    #[test]
    fn structural_edits_match_tone_contracts() {
        assert_eq!(profile_for(Tone::Concise).structure(), StructuralEdit::CapSentences);
        assert_eq!(
            profile_for(Tone::Persuasive).structure(),
            StructuralEdit::ExclaimTerminals
        );
        assert_eq!(profile_for(Tone::Formal).structure(), StructuralEdit::None);
        assert_eq!(profile_for(Tone::Friendly).structure(), StructuralEdit::None);
        assert_eq!(profile_for(Tone::Creative).structure(), StructuralEdit::None);
    }

    #[test]
    fn matching_is_case_insensitive_and_whole_word() {
        let formal = profile_for(Tone::Formal);
        let good = formal
            .rules()
            .iter()
            .find(|rule| rule.pattern().is_match("GOOD"))
            .expect("formal table covers 'good'");
        assert!(good.pattern().is_match("a Good idea"));
        assert!(!good.pattern().is_match("goodness"));
    }
}
