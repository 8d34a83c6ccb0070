#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Procedure,
    Diagnostic,
    Emergency,
    Medication,
}

impl CommandCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandCategory::Procedure => "procedure",
            CommandCategory::Diagnostic => "diagnostic",
            CommandCategory::Emergency => "emergency",
            CommandCategory::Medication => "medication",
        }
    }
}

/// A spoken phrase and the guidance read back for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceCommand {
    pub phrase: &'static str,
    pub response: &'static str,
    pub category: CommandCategory,
}

pub static COMMANDS: [VoiceCommand; 6] = [
    VoiceCommand {
        phrase: "start chest compression",
        response: "Beginning chest compressions. Place the heel of your hand on the center of the \
             chest between the nipples. Push hard and fast at least 2 inches deep. Compress at \
             100 to 120 compressions per minute. Count: one, two, three...",
        category: CommandCategory::Emergency,
    },
    VoiceCommand {
        phrase: "blood pressure reading",
        response: "For blood pressure measurement: Place cuff on upper arm, 1-2 inches above \
             elbow. Pump cuff 20-30 mmHg above expected systolic. Release slowly at 2-3 mmHg per \
             second. Note first sound for systolic, last sound for diastolic pressure.",
        category: CommandCategory::Procedure,
    },
    VoiceCommand {
        phrase: "wound assessment",
        response: "Wound assessment protocol: Examine size using ruler, assess depth and edges. \
             Check for signs of infection including redness, warmth, swelling, purulent \
             drainage. Document location, appearance, and surrounding tissue condition.",
        category: CommandCategory::Diagnostic,
    },
    VoiceCommand {
        phrase: "medication dosage",
        response: "For medication administration, always verify the five rights: right patient, \
             right drug, right dose, right route, right time. Calculate pediatric doses based on \
             weight. Double-check high-risk medications with another provider.",
        category: CommandCategory::Medication,
    },
    VoiceCommand {
        phrase: "emergency protocol",
        response: "Emergency response activated. Assess scene safety first. Check patient \
             responsiveness. Call for help if needed. Begin primary assessment: airway, \
             breathing, circulation. Provide appropriate interventions based on findings.",
        category: CommandCategory::Emergency,
    },
    VoiceCommand {
        phrase: "IV insertion",
        response: "IV insertion procedure: Select appropriate vein, usually cephalic or basilic. \
             Clean site with alcohol. Insert at 15-30 degree angle. Watch for flashback in \
             catheter. Advance catheter, remove needle. Secure and connect tubing.",
        category: CommandCategory::Procedure,
    },
];

pub const FALLBACK_RESPONSE: &str = "I didn't understand that command. Please try asking about \
     chest compressions, blood pressure, wound assessment, medications, or emergency protocols.";

/// Find the command for a transcript.
///
/// Case-insensitive; a command matches when the transcript contains its
/// phrase or the phrase contains the transcript, so a clipped recognition
/// such as "chest compression" still finds "start chest compression". The
/// first match in table order wins. Blank transcripts match nothing.
pub fn match_command(transcript: &str) -> Option<&'static VoiceCommand> {
    let heard = transcript.trim().to_lowercase();
    if heard.is_empty() {
        return None;
    }
    COMMANDS.iter().find(|command| {
        let phrase = command.phrase.to_lowercase();
        heard.contains(&phrase) || phrase.contains(&heard)
    })
}

/// Commands in a category, or all of them for `None`.
pub fn commands_in(category: Option<CommandCategory>) -> impl Iterator<Item = &'static VoiceCommand> {
    COMMANDS
        .iter()
        .filter(move |command| category.is_none_or(|c| command.category == c))
}
