use crate::PixelSample;

/// A colour signature: which pixels belong to it, and how much of the frame
/// (in percent) they must strictly exceed before the condition is reported.
#[derive(Debug, Clone, Copy)]
pub struct ColorRule {
    pub name: &'static str,
    pub predicate: fn(PixelSample) -> bool,
    pub threshold: f64,
    pub label: &'static str,
    pub advisory: &'static str,
}

impl ColorRule {
    pub fn matches(&self, pixel: PixelSample) -> bool {
        (self.predicate)(pixel)
    }
}

/// Which generation of the rule table to evaluate.
///
/// `Extended` is the seven-rule table used by the AR guidance view.
/// `Legacy` is the earlier two-rule table, kept so old recordings can be
/// re-checked with the behaviour they were captured under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSet {
    #[default]
    Extended,
    Legacy,
}

impl RuleSet {
    /// Rules in priority order.
    pub fn rules(self) -> &'static [ColorRule] {
        match self {
            RuleSet::Extended => &EXTENDED_RULES,
            RuleSet::Legacy => &LEGACY_RULES,
        }
    }
}

/// `a > (tenths / 10) * b`, in integers so the boundary is exact.
fn dominates(a: u8, b: u8, tenths: u32) -> bool {
    a as u32 * 10 > b as u32 * tenths
}

fn red_dominant(p: PixelSample) -> bool {
    p.r > 150 && dominates(p.r, p.g, 13) && dominates(p.r, p.b, 13)
}

fn yellow(p: PixelSample) -> bool {
    p.r > 180 && p.g > 180 && p.b < 100 && p.r.abs_diff(p.g) < 40
}

fn white(p: PixelSample) -> bool {
    p.r > 200 && p.g > 200 && p.b > 200
}

fn brown(p: PixelSample) -> bool {
    p.r > 90 && p.g > 60 && p.b < 50 && p.r > p.g && p.g > p.b
}

fn green(p: PixelSample) -> bool {
    p.g > 120 && p.r < 100 && p.b < 100
}

fn blue_purple(p: PixelSample) -> bool {
    p.b > 120 && p.r < 100 && p.g < 100
}

fn dark(p: PixelSample) -> bool {
    p.r < 80 && p.g < 80 && p.b < 80
}

fn legacy_red_dominant(p: PixelSample) -> bool {
    dominates(p.r, p.g, 15) && dominates(p.r, p.b, 15)
}

fn legacy_dark(p: PixelSample) -> bool {
    p.r < 100 && p.g < 100 && p.b < 100
}

const INFLAMMATION: &str = "Inflammation or Infection";
const INFLAMMATION_ADVICE: &str = "Significant redness detected. This may indicate inflammation or \
     infection. Check the area for warmth, swelling and pain, clean it gently and monitor for \
     spreading redness or fever.";

const TISSUE_DAMAGE: &str = "Bruising or Tissue Damage";
const TISSUE_DAMAGE_ADVICE: &str = "Dark discoloration detected. This may indicate bruising or \
     tissue damage. Assess circulation and sensation around the area and seek medical review if \
     it is spreading or painful.";

static EXTENDED_RULES: [ColorRule; 7] = [
    ColorRule {
        name: "red-dominant",
        predicate: red_dominant,
        threshold: 12.0,
        label: INFLAMMATION,
        advisory: INFLAMMATION_ADVICE,
    },
    ColorRule {
        name: "yellow",
        predicate: yellow,
        threshold: 7.0,
        label: "Pus or Discharge",
        advisory: "Yellow discoloration detected. This may indicate pus or discharge. Wear \
             gloves, irrigate the wound with sterile saline and watch for signs of a spreading \
             infection.",
    },
    ColorRule {
        name: "white",
        predicate: white,
        threshold: 8.0,
        label: "Fungal Infection or Necrosis",
        advisory: "White patches detected. This may indicate a fungal infection or necrotic \
             tissue. Keep the area clean and dry and arrange an assessment by a clinician.",
    },
    ColorRule {
        name: "brown",
        predicate: brown,
        threshold: 8.0,
        label: "Scab or Old Wound",
        advisory: "Brown areas detected. This is likely a scab or an older healing wound. Do not \
             remove the scab; keep it clean and protected.",
    },
    ColorRule {
        name: "green",
        predicate: green,
        threshold: 5.0,
        label: "Possible Gangrene or Severe Infection",
        advisory: "Green discoloration detected. This may indicate gangrene or a severe \
             infection. Seek urgent medical attention.",
    },
    ColorRule {
        name: "blue-purple",
        predicate: blue_purple,
        threshold: 7.0,
        label: "Cyanosis or Bruising",
        advisory: "Blue or purple discoloration detected. This may indicate cyanosis or \
             bruising. Check breathing and circulation; if the lips or fingertips are blue, \
             treat it as an emergency.",
    },
    ColorRule {
        name: "dark",
        predicate: dark,
        threshold: 15.0,
        label: TISSUE_DAMAGE,
        advisory: TISSUE_DAMAGE_ADVICE,
    },
];

static LEGACY_RULES: [ColorRule; 2] = [
    ColorRule {
        name: "red-dominant",
        predicate: legacy_red_dominant,
        threshold: 15.0,
        label: INFLAMMATION,
        advisory: INFLAMMATION_ADVICE,
    },
    ColorRule {
        name: "dark",
        predicate: legacy_dark,
        threshold: 20.0,
        label: TISSUE_DAMAGE,
        advisory: TISSUE_DAMAGE_ADVICE,
    },
];
