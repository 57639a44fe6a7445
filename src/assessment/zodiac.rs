use super::domain::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[serde(rename = "Bélier")]
    Aries,
    #[serde(rename = "Taureau")]
    Taurus,
    #[serde(rename = "Gémeaux")]
    Gemini,
    #[serde(rename = "Cancer")]
    Cancer,
    #[serde(rename = "Lion")]
    Leo,
    #[serde(rename = "Vierge")]
    Virgo,
    #[serde(rename = "Balance")]
    Libra,
    #[serde(rename = "Scorpion")]
    Scorpio,
    #[serde(rename = "Sagittaire")]
    Sagittarius,
    #[serde(rename = "Capricorne")]
    Capricorn,
    #[serde(rename = "Verseau")]
    Aquarius,
    #[serde(rename = "Poissons")]
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "Feu")]
    Fire,
    #[serde(rename = "Terre")]
    Earth,
    #[serde(rename = "Air")]
    Air,
    #[serde(rename = "Eau")]
    Water,
}

impl ZodiacSign {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aries => "Bélier",
            Self::Taurus => "Taureau",
            Self::Gemini => "Gémeaux",
            Self::Cancer => "Cancer",
            Self::Leo => "Lion",
            Self::Virgo => "Vierge",
            Self::Libra => "Balance",
            Self::Scorpio => "Scorpion",
            Self::Sagittarius => "Sagittaire",
            Self::Capricorn => "Capricorne",
            Self::Aquarius => "Verseau",
            Self::Pisces => "Poissons",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }
}

impl Element {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fire => "Feu",
            Self::Earth => "Terre",
            Self::Air => "Air",
            Self::Water => "Eau",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sign paired with a dominant/secondary combination.
///
/// The table is symmetric; a dimension paired with itself maps to its
/// "double" sign.
pub const fn zodiac_sign(primary: Dimension, secondary: Dimension) -> ZodiacSign {
    use Dimension::*;

    match (primary, secondary) {
        (Openness, Openness) => ZodiacSign::Aquarius,
        (Conscientiousness, Conscientiousness) => ZodiacSign::Capricorn,
        (Extraversion, Extraversion) => ZodiacSign::Aries,
        (Agreeableness, Agreeableness) => ZodiacSign::Cancer,
        (Neuroticism, Neuroticism) => ZodiacSign::Cancer,

        (Openness, Conscientiousness) | (Conscientiousness, Openness) => ZodiacSign::Sagittarius,
        (Openness, Extraversion) | (Extraversion, Openness) => ZodiacSign::Gemini,
        (Openness, Agreeableness) | (Agreeableness, Openness) => ZodiacSign::Pisces,
        (Openness, Neuroticism) | (Neuroticism, Openness) => ZodiacSign::Libra,

        (Conscientiousness, Extraversion) | (Extraversion, Conscientiousness) => ZodiacSign::Leo,
        (Conscientiousness, Agreeableness) | (Agreeableness, Conscientiousness) => {
            ZodiacSign::Taurus
        }
        (Conscientiousness, Neuroticism) | (Neuroticism, Conscientiousness) => ZodiacSign::Virgo,

        (Extraversion, Agreeableness) | (Agreeableness, Extraversion) => ZodiacSign::Libra,
        (Extraversion, Neuroticism) | (Neuroticism, Extraversion) => ZodiacSign::Scorpio,

        (Agreeableness, Neuroticism) | (Neuroticism, Agreeableness) => ZodiacSign::Pisces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_is_symmetric() {
        for primary in Dimension::ordered() {
            for secondary in Dimension::ordered() {
                assert_eq!(
                    zodiac_sign(primary, secondary),
                    zodiac_sign(secondary, primary),
                    "{primary}/{secondary}"
                );
            }
        }
    }

    #[test]
    fn known_pairings() {
        assert_eq!(
            zodiac_sign(Dimension::Openness, Dimension::Conscientiousness),
            ZodiacSign::Sagittarius
        );
        assert_eq!(
            zodiac_sign(Dimension::Extraversion, Dimension::Neuroticism),
            ZodiacSign::Scorpio
        );
        assert_eq!(
            zodiac_sign(Dimension::Neuroticism, Dimension::Neuroticism),
            ZodiacSign::Cancer
        );
    }

    #[test]
    fn elements_group_signs_by_three() {
        let signs = [
            ZodiacSign::Aries,
            ZodiacSign::Taurus,
            ZodiacSign::Gemini,
            ZodiacSign::Cancer,
            ZodiacSign::Leo,
            ZodiacSign::Virgo,
            ZodiacSign::Libra,
            ZodiacSign::Scorpio,
            ZodiacSign::Sagittarius,
            ZodiacSign::Capricorn,
            ZodiacSign::Aquarius,
            ZodiacSign::Pisces,
        ];
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = signs.iter().filter(|sign| sign.element() == element).count();
            assert_eq!(count, 3, "{}", element.label());
        }
        assert_eq!(ZodiacSign::Scorpio.to_string(), "Scorpion");
    }
}
