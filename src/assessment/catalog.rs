use super::domain::{Archetype, Dimension, Facet};

/// The 30 facets. Declaration order is the shadow-trait tie-break order.
pub static FACETS: [Facet; 30] = [
    Facet {
        id: "imagination",
        name: "Imagination",
        dimension: Dimension::Openness,
        description: "Ouverture mentale aux nouvelles idées et à la créativité.",
    },
    Facet {
        id: "interets_artistiques",
        name: "Intérêts artistiques",
        dimension: Dimension::Openness,
        description: "Appréciation de l'art et de la beauté sous toutes ses formes.",
    },
    Facet {
        id: "emotivite",
        name: "Émotivité",
        dimension: Dimension::Openness,
        description: "Sensibilité et profondeur des expériences émotionnelles.",
    },
    Facet {
        id: "gout_aventure",
        name: "Goût de l'aventure",
        dimension: Dimension::Openness,
        description: "Désir d'explorer et de vivre de nouvelles expériences.",
    },
    Facet {
        id: "intellect",
        name: "Intellect",
        dimension: Dimension::Openness,
        description: "Curiosité intellectuelle et intérêt pour les idées abstraites.",
    },
    Facet {
        id: "liberalisme",
        name: "Libéralisme",
        dimension: Dimension::Openness,
        description: "Ouverture au changement, remise en question des autorités et traditions.",
    },
    Facet {
        id: "auto_efficacite",
        name: "Auto‑efficacité",
        dimension: Dimension::Conscientiousness,
        description: "Confiance dans sa capacité à accomplir les tâches avec succès.",
    },
    Facet {
        id: "ordre",
        name: "Ordre",
        dimension: Dimension::Conscientiousness,
        description: "Tendance à être organisé et méthodique.",
    },
    Facet {
        id: "sens_devoir",
        name: "Sens du devoir",
        dimension: Dimension::Conscientiousness,
        description: "Engagement à respecter les obligations morales et les responsabilités.",
    },
    Facet {
        id: "accomplissement",
        name: "Recherche d'accomplissement",
        dimension: Dimension::Conscientiousness,
        description: "Aspiration à l'excellence et aux réalisations significatives.",
    },
    Facet {
        id: "autodiscipline",
        name: "Autodiscipline",
        dimension: Dimension::Conscientiousness,
        description: "Capacité à poursuivre ses objectifs malgré les distractions.",
    },
    Facet {
        id: "prudence",
        name: "Prudence",
        dimension: Dimension::Conscientiousness,
        description: "Tendance à réfléchir avant d'agir et à considérer les conséquences.",
    },
    Facet {
        id: "chaleur",
        name: "Chaleur",
        dimension: Dimension::Extraversion,
        description: "Facilité à se montrer amical et à établir des connexions avec autrui.",
    },
    Facet {
        id: "sociabilite",
        name: "Sociabilité",
        dimension: Dimension::Extraversion,
        description: "Appréciation des interactions en groupe et du contact social fréquent.",
    },
    Facet {
        id: "assertivite",
        name: "Assertivité",
        dimension: Dimension::Extraversion,
        description: "Tendance à s'affirmer, prendre la parole et assumer un rôle de leader.",
    },
    Facet {
        id: "niveau_activite",
        name: "Niveau d'activité",
        dimension: Dimension::Extraversion,
        description: "Énergie et rythme de vie dynamique.",
    },
    Facet {
        id: "recherche_sensations",
        name: "Recherche de sensations",
        dimension: Dimension::Extraversion,
        description: "Attrait pour l'excitation et la stimulation.",
    },
    Facet {
        id: "joie",
        name: "Joie",
        dimension: Dimension::Extraversion,
        description: "Tendance à ressentir et exprimer des émotions positives.",
    },
    Facet {
        id: "confiance",
        name: "Confiance",
        dimension: Dimension::Agreeableness,
        description: "Disposition à croire aux bonnes intentions des autres.",
    },
    Facet {
        id: "droiture",
        name: "Droiture",
        dimension: Dimension::Agreeableness,
        description: "Sincérité et honnêteté dans les relations.",
    },
    Facet {
        id: "altruisme",
        name: "Altruisme",
        dimension: Dimension::Agreeableness,
        description: "Préoccupation active pour le bien-être des autres.",
    },
    Facet {
        id: "cooperation",
        name: "Coopération",
        dimension: Dimension::Agreeableness,
        description: "Volonté de compromis et d'harmonie dans les relations.",
    },
    Facet {
        id: "modestie",
        name: "Modestie",
        dimension: Dimension::Agreeableness,
        description: "Tendance à la réserve concernant ses propres accomplissements.",
    },
    Facet {
        id: "empathie",
        name: "Empathie",
        dimension: Dimension::Agreeableness,
        description: "Sensibilité aux sentiments et besoins des autres.",
    },
    Facet {
        id: "anxiete",
        name: "Anxiété",
        dimension: Dimension::Neuroticism,
        description: "Tendance à s'inquiéter et à anticiper les problèmes.",
    },
    Facet {
        id: "colere",
        name: "Colère",
        dimension: Dimension::Neuroticism,
        description: "Propension à ressentir de la frustration et de l'irritation.",
    },
    Facet {
        id: "depression",
        name: "Dépression",
        dimension: Dimension::Neuroticism,
        description: "Tendance à éprouver des sentiments de tristesse ou d'abattement.",
    },
    Facet {
        id: "embarras_social",
        name: "Embarras social",
        dimension: Dimension::Neuroticism,
        description: "Inconfort et conscience de soi en situations sociales.",
    },
    Facet {
        id: "immoderation",
        name: "Immodération",
        dimension: Dimension::Neuroticism,
        description: "Difficulté à résister aux tentations et à contrôler ses impulsions.",
    },
    Facet {
        id: "vulnerabilite",
        name: "Vulnérabilité",
        dimension: Dimension::Neuroticism,
        description: "Difficulté à gérer le stress et la pression.",
    },
];

pub static ARCHETYPES: [Archetype; 5] = [
    Archetype {
        id: "explorer",
        name: "Explorateur Créatif",
        primary_dimension: Dimension::Openness,
        description: "Esprit libre à l'imagination foisonnante, tu cherches constamment à repousser les frontières de ta connaissance et de ton expérience.",
        adjectives: &["Innovant", "Curieux", "Visionnaire"],
        strengths: &[
            "Création d'idées originales",
            "Adaptation au changement",
            "Appréciation des arts",
        ],
        challenges: &[
            "Parfois déconnecté des réalités pratiques",
            "Peut manquer de persévérance",
            "Tendance à trop théoriser",
        ],
    },
    Archetype {
        id: "architect",
        name: "Architecte Méthodique",
        primary_dimension: Dimension::Conscientiousness,
        description: "Organisé et fiable, tu excelles à transformer des visions en plans concrets et à concrétiser tes objectifs avec persévérance.",
        adjectives: &["Structuré", "Persévérant", "Méticuleux"],
        strengths: &["Excellente organisation", "Fiabilité", "Accomplissement des objectifs"],
        challenges: &[
            "Peut être rigide",
            "Perfectionnisme excessif",
            "Difficulté à s'adapter rapidement",
        ],
    },
    Archetype {
        id: "catalyst",
        name: "Catalyseur Social",
        primary_dimension: Dimension::Extraversion,
        description: "Énergique et charismatique, tu animes naturellement ton entourage et crées des connexions significatives entre les personnes.",
        adjectives: &["Charismatique", "Énergique", "Expressif"],
        strengths: &[
            "Communication efficace",
            "Leadership naturel",
            "Création d'ambiance positive",
        ],
        challenges: &[
            "Besoin constant de stimulation",
            "Peut dominer les conversations",
            "Impatience occasionnelle",
        ],
    },
    Archetype {
        id: "diplomat",
        name: "Diplomate Bienveillant",
        primary_dimension: Dimension::Agreeableness,
        description: "Empathique et attentionné, tu crées l'harmonie autour de toi et valorises profondément les relations humaines authentiques.",
        adjectives: &["Empathique", "Coopératif", "Altruiste"],
        strengths: &[
            "Résolution de conflits",
            "Création d'environnements harmonieux",
            "Soutien émotionnel",
        ],
        challenges: &[
            "Évitement des confrontations nécessaires",
            "Tendance à négliger ses propres besoins",
            "Difficulté à dire non",
        ],
    },
    Archetype {
        id: "sentinel",
        name: "Sentinelle Vigilante",
        primary_dimension: Dimension::Neuroticism,
        description: "Intensément conscient des risques potentiels, tu anticipes les problèmes et ressens profondément les émotions qui t'entourent.",
        adjectives: &["Vigilant", "Sensible", "Perspicace"],
        strengths: &[
            "Anticipation des problèmes",
            "Détection des nuances émotionnelles",
            "Réactivité aux situations",
        ],
        challenges: &[
            "Tendance à l'inquiétude excessive",
            "Réactions parfois disproportionnées",
            "Difficulté à se détendre",
        ],
    },
];

pub fn facets() -> &'static [Facet] {
    &FACETS
}

pub fn facet(id: &str) -> Option<&'static Facet> {
    FACETS.iter().find(|facet| facet.id == id)
}

/// Facets of one dimension, in declaration order.
pub fn facets_for(dimension: Dimension) -> impl Iterator<Item = &'static Facet> {
    FACETS
        .iter()
        .filter(move |facet| facet.dimension == dimension)
}

pub fn archetype(id: &str) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|archetype| archetype.id == id)
}

pub fn archetype_for(dimension: Dimension) -> Option<&'static Archetype> {
    ARCHETYPES
        .iter()
        .find(|archetype| archetype.primary_dimension == dimension)
}

/// Fallback when no archetype matches a dimension.
pub fn default_archetype() -> &'static Archetype {
    &ARCHETYPES[0]
}
