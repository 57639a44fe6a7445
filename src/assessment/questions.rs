use super::domain::{Dimension, Question};

/// The standard questionnaire: 120 items, 4 per facet, 24 per dimension.
pub static QUESTIONS: [Question; 120] = [
    Question {
        id: 1,
        text: "J'aime explorer des idées nouvelles et originales.",
        dimension: Dimension::Openness,
        facet: "imagination",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 2,
        text: "Je préfère m'en tenir à des concepts concrets et familiers.",
        dimension: Dimension::Openness,
        facet: "imagination",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 3,
        text: "Je passe souvent du temps à rêver éveillé.",
        dimension: Dimension::Openness,
        facet: "imagination",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 4,
        text: "Je trouve rarement des applications pratiques aux idées abstraites.",
        dimension: Dimension::Openness,
        facet: "imagination",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 5,
        text: "La musique ou l'art me touchent profondément.",
        dimension: Dimension::Openness,
        facet: "interets_artistiques",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 6,
        text: "Les galeries d'art m'ennuient rapidement.",
        dimension: Dimension::Openness,
        facet: "interets_artistiques",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 7,
        text: "J'apprécie d'admirer la beauté dans les petites choses.",
        dimension: Dimension::Openness,
        facet: "interets_artistiques",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 8,
        text: "Je prête peu d'attention à l'esthétique qui m'entoure.",
        dimension: Dimension::Openness,
        facet: "interets_artistiques",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 9,
        text: "Je suis sensible aux émotions subtiles des films ou chansons.",
        dimension: Dimension::Openness,
        facet: "emotivite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 10,
        text: "Je reste généralement indifférent aux œuvres chargées d'émotion.",
        dimension: Dimension::Openness,
        facet: "emotivite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 11,
        text: "Je vis les expériences intenses avec beaucoup d'émotion.",
        dimension: Dimension::Openness,
        facet: "emotivite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 12,
        text: "Je trouve exagéré d'exprimer ses états d'âme.",
        dimension: Dimension::Openness,
        facet: "emotivite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 13,
        text: "J'adore sortir de ma zone de confort pour découvrir de nouveaux endroits.",
        dimension: Dimension::Openness,
        facet: "gout_aventure",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 14,
        text: "Je préfère la routine à l'inconnu.",
        dimension: Dimension::Openness,
        facet: "gout_aventure",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 15,
        text: "Essayer des cuisines exotiques me passionne.",
        dimension: Dimension::Openness,
        facet: "gout_aventure",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 16,
        text: "Je me méfie des activités qui changent mes habitudes.",
        dimension: Dimension::Openness,
        facet: "gout_aventure",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 17,
        text: "J'aime débattre de questions théoriques complexes.",
        dimension: Dimension::Openness,
        facet: "intellect",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 18,
        text: "Les discussions abstraites me fatiguent.",
        dimension: Dimension::Openness,
        facet: "intellect",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 19,
        text: "Je prends plaisir à résoudre des énigmes difficiles.",
        dimension: Dimension::Openness,
        facet: "intellect",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 20,
        text: "Je préfère éviter les sujets trop techniques.",
        dimension: Dimension::Openness,
        facet: "intellect",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 21,
        text: "Je pense qu'il faut remettre en question les traditions rigides.",
        dimension: Dimension::Openness,
        facet: "liberalisme",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 22,
        text: "Les règles établies sont là pour être suivies, pas discutées.",
        dimension: Dimension::Openness,
        facet: "liberalisme",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 23,
        text: "Je suis ouvert à des modes de vie très différents du mien.",
        dimension: Dimension::Openness,
        facet: "liberalisme",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 24,
        text: "Je trouve souvent que les changements sociaux vont trop loin.",
        dimension: Dimension::Openness,
        facet: "liberalisme",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 25,
        text: "Je me sens capable de gérer efficacement la plupart des défis.",
        dimension: Dimension::Conscientiousness,
        facet: "auto_efficacite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 26,
        text: "Je doute souvent de ma capacité à mener les tâches à bien.",
        dimension: Dimension::Conscientiousness,
        facet: "auto_efficacite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 27,
        text: "Je m'organise pour atteindre mes objectifs.",
        dimension: Dimension::Conscientiousness,
        facet: "auto_efficacite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 28,
        text: "Je me sens facilement dépassé par les responsabilités.",
        dimension: Dimension::Conscientiousness,
        facet: "auto_efficacite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 29,
        text: "J'aime garder mon espace de travail parfaitement rangé.",
        dimension: Dimension::Conscientiousness,
        facet: "ordre",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 30,
        text: "Le désordre ne me dérange pas vraiment.",
        dimension: Dimension::Conscientiousness,
        facet: "ordre",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 31,
        text: "Je classe mes fichiers ou objets de façon méthodique.",
        dimension: Dimension::Conscientiousness,
        facet: "ordre",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 32,
        text: "Je laisse souvent traîner mes affaires.",
        dimension: Dimension::Conscientiousness,
        facet: "ordre",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 33,
        text: "Je me sens moralement obligé de tenir mes promesses.",
        dimension: Dimension::Conscientiousness,
        facet: "sens_devoir",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 34,
        text: "Il m'arrive de ne pas tenir parole si ce n'est pas important.",
        dimension: Dimension::Conscientiousness,
        facet: "sens_devoir",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 35,
        text: "Je prends mes engagements au sérieux.",
        dimension: Dimension::Conscientiousness,
        facet: "sens_devoir",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 36,
        text: "Les règles sont parfois faites pour être contournées.",
        dimension: Dimension::Conscientiousness,
        facet: "sens_devoir",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 37,
        text: "Je vise constamment des objectifs ambitieux.",
        dimension: Dimension::Conscientiousness,
        facet: "accomplissement",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 38,
        text: "Je ne me fixe pas de cibles exigeantes.",
        dimension: Dimension::Conscientiousness,
        facet: "accomplissement",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 39,
        text: "La réussite me motive à travailler dur.",
        dimension: Dimension::Conscientiousness,
        facet: "accomplissement",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 40,
        text: "Je me contente facilement du minimum.",
        dimension: Dimension::Conscientiousness,
        facet: "accomplissement",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 41,
        text: "Je termine les tâches même quand elles sont ennuyeuses.",
        dimension: Dimension::Conscientiousness,
        facet: "autodiscipline",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 42,
        text: "Je procrastine fréquemment.",
        dimension: Dimension::Conscientiousness,
        facet: "autodiscipline",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 43,
        text: "Je respecte les échéances que je me fixe.",
        dimension: Dimension::Conscientiousness,
        facet: "autodiscipline",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 44,
        text: "Je me laisse distraire au moindre prétexte.",
        dimension: Dimension::Conscientiousness,
        facet: "autodiscipline",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 45,
        text: "Je réfléchis longuement avant de prendre une décision importante.",
        dimension: Dimension::Conscientiousness,
        facet: "prudence",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 46,
        text: "Je prends des décisions sur un coup de tête.",
        dimension: Dimension::Conscientiousness,
        facet: "prudence",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 47,
        text: "J'évalue les risques avant d'agir.",
        dimension: Dimension::Conscientiousness,
        facet: "prudence",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 48,
        text: "Je fonce d'abord, je réfléchis après.",
        dimension: Dimension::Conscientiousness,
        facet: "prudence",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 49,
        text: "Je me montre naturellement chaleureux avec les nouvelles personnes.",
        dimension: Dimension::Extraversion,
        facet: "chaleur",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 50,
        text: "Je garde mes distances avec la plupart des gens.",
        dimension: Dimension::Extraversion,
        facet: "chaleur",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 51,
        text: "On me trouve facilement accessible.",
        dimension: Dimension::Extraversion,
        facet: "chaleur",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 52,
        text: "J'ai du mal à créer une connexion avec des inconnus.",
        dimension: Dimension::Extraversion,
        facet: "chaleur",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 53,
        text: "J'apprécie les fêtes où je rencontre beaucoup de monde.",
        dimension: Dimension::Extraversion,
        facet: "sociabilite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 54,
        text: "Les grands rassemblements me mettent mal à l'aise.",
        dimension: Dimension::Extraversion,
        facet: "sociabilite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 55,
        text: "Je recharge mon énergie au contact d'autrui.",
        dimension: Dimension::Extraversion,
        facet: "sociabilite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 56,
        text: "Passer du temps seul me suffit largement.",
        dimension: Dimension::Extraversion,
        facet: "sociabilite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 57,
        text: "Je prends la parole pour défendre mes idées.",
        dimension: Dimension::Extraversion,
        facet: "assertivite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 58,
        text: "Je laisse souvent les autres décider à ma place.",
        dimension: Dimension::Extraversion,
        facet: "assertivite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 59,
        text: "Je dirige volontiers une discussion de groupe.",
        dimension: Dimension::Extraversion,
        facet: "assertivite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 60,
        text: "Je préfère ne pas être au centre de l'attention.",
        dimension: Dimension::Extraversion,
        facet: "assertivite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 61,
        text: "Je suis constamment en mouvement, physiquement ou mentalement.",
        dimension: Dimension::Extraversion,
        facet: "niveau_activite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 62,
        text: "Je mène un rythme plutôt calme et posé.",
        dimension: Dimension::Extraversion,
        facet: "niveau_activite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 63,
        text: "J'aime avoir plusieurs projets en parallèle.",
        dimension: Dimension::Extraversion,
        facet: "niveau_activite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 64,
        text: "Je n'aime pas être pressé ou débordé.",
        dimension: Dimension::Extraversion,
        facet: "niveau_activite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 65,
        text: "Les activités fortes en adrénaline m'attirent.",
        dimension: Dimension::Extraversion,
        facet: "recherche_sensations",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 66,
        text: "Je fuis les sensations fortes.",
        dimension: Dimension::Extraversion,
        facet: "recherche_sensations",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 67,
        text: "Je cherche des expériences nouvelles et palpitantes.",
        dimension: Dimension::Extraversion,
        facet: "recherche_sensations",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 68,
        text: "Je préfère la sécurité à l'excitation.",
        dimension: Dimension::Extraversion,
        facet: "recherche_sensations",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 69,
        text: "Je communique facilement ma bonne humeur.",
        dimension: Dimension::Extraversion,
        facet: "joie",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 70,
        text: "On me trouve rarement enthousiaste.",
        dimension: Dimension::Extraversion,
        facet: "joie",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 71,
        text: "Je ris et souris souvent.",
        dimension: Dimension::Extraversion,
        facet: "joie",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 72,
        text: "J'exprime peu mes émotions positives.",
        dimension: Dimension::Extraversion,
        facet: "joie",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 73,
        text: "Je suppose d'emblée que les autres sont honnêtes.",
        dimension: Dimension::Agreeableness,
        facet: "confiance",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 74,
        text: "Je me méfie systématiquement des intentions des gens.",
        dimension: Dimension::Agreeableness,
        facet: "confiance",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 75,
        text: "Je pense que la plupart des gens méritent le bénéfice du doute.",
        dimension: Dimension::Agreeableness,
        facet: "confiance",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 76,
        text: "Il vaut mieux rester sur ses gardes avec tout le monde.",
        dimension: Dimension::Agreeableness,
        facet: "confiance",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 77,
        text: "Je dis ce que je pense, même si cela me désavantage.",
        dimension: Dimension::Agreeableness,
        facet: "droiture",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 78,
        text: "Je peux enjoliver la vérité pour éviter des problèmes.",
        dimension: Dimension::Agreeableness,
        facet: "droiture",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 79,
        text: "L'honnêteté est une valeur non négociable pour moi.",
        dimension: Dimension::Agreeableness,
        facet: "droiture",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 80,
        text: "Mentir est parfois nécessaire pour avancer.",
        dimension: Dimension::Agreeableness,
        facet: "droiture",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 81,
        text: "Aider les autres me procure une grande satisfaction.",
        dimension: Dimension::Agreeableness,
        facet: "altruisme",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 82,
        text: "Je préfère d'abord penser à mes propres besoins.",
        dimension: Dimension::Agreeableness,
        facet: "altruisme",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 83,
        text: "Je consacre du temps à des causes sans attendre de retour.",
        dimension: Dimension::Agreeableness,
        facet: "altruisme",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 84,
        text: "Je n'ai pas le temps de rendre service gratuitement.",
        dimension: Dimension::Agreeableness,
        facet: "altruisme",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 85,
        text: "Je cherche des solutions qui satisfont tout le monde.",
        dimension: Dimension::Agreeableness,
        facet: "cooperation",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 86,
        text: "Je n'hésite pas à imposer mon point de vue.",
        dimension: Dimension::Agreeableness,
        facet: "cooperation",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 87,
        text: "Je cède volontiers pour maintenir l'harmonie.",
        dimension: Dimension::Agreeableness,
        facet: "cooperation",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 88,
        text: "Je tiens à gagner chaque désaccord.",
        dimension: Dimension::Agreeableness,
        facet: "cooperation",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 89,
        text: "Je parle peu de mes réussites.",
        dimension: Dimension::Agreeableness,
        facet: "modestie",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 90,
        text: "J'aime que l'on sache quand j'ai réussi quelque chose.",
        dimension: Dimension::Agreeableness,
        facet: "modestie",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 91,
        text: "Je ressens de la gêne quand on me complimente.",
        dimension: Dimension::Agreeableness,
        facet: "modestie",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 92,
        text: "Je me vends avec assurance.",
        dimension: Dimension::Agreeableness,
        facet: "modestie",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 93,
        text: "Je suis touché par la détresse des autres.",
        dimension: Dimension::Agreeableness,
        facet: "empathie",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 94,
        text: "Les problèmes des autres me laissent souvent indifférent.",
        dimension: Dimension::Agreeableness,
        facet: "empathie",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 95,
        text: "Je peux comprendre facilement ce que ressent quelqu'un.",
        dimension: Dimension::Agreeableness,
        facet: "empathie",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 96,
        text: "Je trouve difficile de me mettre à la place des gens.",
        dimension: Dimension::Agreeableness,
        facet: "empathie",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 97,
        text: "Je m'inquiète facilement pour de petites choses.",
        dimension: Dimension::Neuroticism,
        facet: "anxiete",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 98,
        text: "Je reste calme même sous pression.",
        dimension: Dimension::Neuroticism,
        facet: "anxiete",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 99,
        text: "Je m'emporte quand on me manque de respect.",
        dimension: Dimension::Neuroticism,
        facet: "colere",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 100,
        text: "Je garde mon sang-froid même provoqué.",
        dimension: Dimension::Neuroticism,
        facet: "colere",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 101,
        text: "La frustration me met rapidement en colère.",
        dimension: Dimension::Neuroticism,
        facet: "colere",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 102,
        text: "Je suis difficile à irriter.",
        dimension: Dimension::Neuroticism,
        facet: "colere",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 103,
        text: "Je me sens parfois abattu sans raison apparente.",
        dimension: Dimension::Neuroticism,
        facet: "depression",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 104,
        text: "Je garde toujours un moral stable.",
        dimension: Dimension::Neuroticism,
        facet: "depression",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 105,
        text: "Il m'arrive de perdre l'envie de faire des choses.",
        dimension: Dimension::Neuroticism,
        facet: "depression",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 106,
        text: "Je suis rarement mélancolique.",
        dimension: Dimension::Neuroticism,
        facet: "depression",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 107,
        text: "Je crains d'être jugé négativement en public.",
        dimension: Dimension::Neuroticism,
        facet: "embarras_social",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 108,
        text: "Je me sens à l'aise quelles que soient les circonstances sociales.",
        dimension: Dimension::Neuroticism,
        facet: "embarras_social",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 109,
        text: "Je repense longtemps aux faux pas que je peux commettre.",
        dimension: Dimension::Neuroticism,
        facet: "embarras_social",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 110,
        text: "Je ne me soucie pas du regard des autres.",
        dimension: Dimension::Neuroticism,
        facet: "embarras_social",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 111,
        text: "Je cède facilement aux tentations alimentaires ou autres.",
        dimension: Dimension::Neuroticism,
        facet: "immoderation",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 112,
        text: "Je maîtrise toujours mes envies.",
        dimension: Dimension::Neuroticism,
        facet: "immoderation",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 113,
        text: "Je dépense parfois impulsivement.",
        dimension: Dimension::Neuroticism,
        facet: "immoderation",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 114,
        text: "Je sais résister aux achats impulsifs.",
        dimension: Dimension::Neuroticism,
        facet: "immoderation",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 115,
        text: "En situation de crise, je me sens vite dépassé.",
        dimension: Dimension::Neuroticism,
        facet: "vulnerabilite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 116,
        text: "Je gère bien les situations d'urgence.",
        dimension: Dimension::Neuroticism,
        facet: "vulnerabilite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 117,
        text: "Je panique sous la pression forte.",
        dimension: Dimension::Neuroticism,
        facet: "vulnerabilite",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 118,
        text: "Je reste organisé même quand tout va mal.",
        dimension: Dimension::Neuroticism,
        facet: "vulnerabilite",
        reverse: true,
        weight: 1.0,
    },
    Question {
        id: 119,
        text: "Je me fais souvent du souci pour l'avenir.",
        dimension: Dimension::Neuroticism,
        facet: "anxiete",
        reverse: false,
        weight: 1.0,
    },
    Question {
        id: 120,
        text: "Il m'est rare de me sentir nerveux.",
        dimension: Dimension::Neuroticism,
        facet: "anxiete",
        reverse: true,
        weight: 1.0,
    },
];

pub fn question_bank() -> &'static [Question] {
    &QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog;
    use std::collections::HashSet;

    #[test]
    fn bank_has_unique_sequential_ids() {
        let ids: Vec<_> = QUESTIONS.iter().map(|question| question.id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 120);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&120));
    }

    #[test]
    fn every_facet_has_two_direct_and_two_reverse_items() {
        for facet in catalog::facets() {
            let items: Vec<_> = QUESTIONS
                .iter()
                .filter(|question| question.facet == facet.id)
                .collect();
            assert_eq!(items.len(), 4, "{} item count", facet.id);
            assert_eq!(
                items.iter().filter(|question| question.reverse).count(),
                2,
                "{} reverse count",
                facet.id
            );
            assert!(items
                .iter()
                .all(|question| question.dimension == facet.dimension));
        }
    }

    #[test]
    fn each_dimension_has_twenty_four_items() {
        for dimension in Dimension::ordered() {
            let count = QUESTIONS
                .iter()
                .filter(|question| question.dimension == dimension)
                .count();
            assert_eq!(count, 24, "{dimension} item count");
        }
    }
}
