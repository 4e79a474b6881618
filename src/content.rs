//! Static roadmap content shown by the pages.

use crate::components::constellation::{
	FeedbackSection, Interview, Need, NodeRecord, NodeStatus, QuestionSection, Questionnaire, Video,
};

static INTERVIEWS: [Interview; 4] = [
	Interview {
		id: "A",
		name: "Participante A",
		profile: "Estudiante intermedio",
		description: "Motivado por la necesidad de acceder a información académica (investigación) y conectar con otros. Aprende principalmente por inmersión y consumo de medios.",
		link: "https://drive.google.com/file/d/10lceuvvAuO_BHuns6S67VVdFV03oa0b_/view?usp=drive_link",
		image: Some("/interviews/alonso.png"),
	},
	Interview {
		id: "B",
		name: "Participante B",
		profile: "Estudiante avanzado",
		description: "Alguien que ya es conversacionalmente fluido, pero que lucha por encontrar la palabra precisa y a menudo recurre a un vocabulario más simple del que posee pasivamente.",
		link: "https://drive.google.com/file/d/1ymVhodDsJ4Isb8L9-i3npGqpKtDB1Q-Y/view?usp=sharing",
		image: Some("/interviews/jose-paredes.png"),
	},
	Interview {
		id: "C",
		name: "Participante C",
		profile: "Estudiante con poca práctica comunicativa",
		description: "Usuario con nivel de inglés intermedio auto-percibido (más fuerte en lectura que en escucha o habla). Su principal método actual es la lectura, aunque antes hablaba más. Tiende a traducir mentalmente desde el español.",
		link: "https://drive.google.com/file/d/1NlJnEyfsQYuu460V8KB4BrKJlICffKzJ/view?usp=drive_link",
		image: None,
	},
	Interview {
		id: "D",
		name: "Participante D",
		profile: "Docente de idiomas",
		description: "Docente de idiomas con experiencia enseñando inglés en diversos niveles. Actualmente cursando una maestría y especialización (CELTA). Aporta la perspectiva pedagógica sobre las dificultades y estrategias de los estudiantes.",
		link: "https://drive.google.com/file/d/1r7jcCdOTchutg33isQn9eQgs9R2bWGWR/view?usp=drive_link",
		image: Some("/interviews/valeria-hancco.png"),
	},
];

static QUESTIONNAIRES: [Questionnaire; 2] = [
	Questionnaire {
		title: "Cuestionario para Estudiantes",
		audience: "Estudiantes",
		sections: &[
			QuestionSection {
				title: Some("Sección 1: El Contexto"),
				questions: &[
					"En una escala del 1 al 10, ¿cómo calificas tu habilidad para entender inglés (leyendo/escuchando)? ¿Y tu habilidad para hablarlo?",
					"¿Te pasa que reconoces una palabra al leer, pero días después, cuando quieres usarla, no la recuerdas?",
				],
			},
			QuestionSection {
				title: Some("Sección 2: El \"Bloqueo\" y sus Causas"),
				questions: &[
					"¿Cómo percibes que es tu proceso de recuperación de lenguaje durante una conversación o redacción?",
					"Cuando olvidas una palabra ¿Cómo intentas recordar o reemplazarla? (¿usas una palabra más simple, relacionada, describes la idea?).",
					"Cuando hablas, ¿sientes que piensas en español y traduces, o las palabras fluyen directamente en inglés?",
					"¿Te confundes a menudo al elegir entre palabras con significados parecidos (como see, look y watch)?",
					"¿Sientes a veces que usas palabras \"fáciles\" (como \"good\") aunque sabes que existe una palabra más precisa (como \"outstanding\"), pero no te viene a la mente lo suficientemente rápido?",
				],
			},
			QuestionSection {
				title: Some("Sección 3: El Impacto"),
				questions: &[
					"¿Cómo afecta esta experiencia a tu confianza general? ¿Evitas hablar en ciertas situaciones por miedo a bloquearte?",
				],
			},
		],
	},
	Questionnaire {
		title: "Cuestionario para Docente",
		audience: "Docente",
		sections: &[QuestionSection {
			title: None,
			questions: &[
				"¿Qué falla en los métodos habituales de enseñar vocabulario que dificulta que los alumnos usen las palabras que aprenden?",
				"Cuando un alumno se 'bloquea' buscando una palabra, ¿qué habilidad clave crees que necesita desarrollar para encontrarla?",
				"¿Qué tipo de práctica ayudaría más a los alumnos a poder usar espontáneamente las palabras que ya entienden?",
				"¿Cómo afecta a los alumnos el traducir mentalmente o confundir palabras parecidas al comunicarse?",
				"En tu opinión, ¿cuál es la necesidad más importante para que los alumnos puedan usar activamente el vocabulario que ya conocen?",
			],
		}],
	},
];

static KEY_NEEDS: [Need; 4] = [
	Need {
		number: "1",
		description: "Los estudiantes necesitan desarrollar la capacidad de formular ideas directamente en inglés para mejorar la fluidez.",
	},
	Need {
		number: "2",
		description: "Se necesitan prácticas que fomenten la recuperación activa de palabras desde la memoria conectándolas con su significado y contexto.",
	},
	Need {
		number: "3",
		description: "La práctica constante es fundamental, independientemente de conocer las reglas gramaticales.",
	},
	Need {
		number: "4",
		description: "Existe la necesidad de métodos de aprendizaje que sean motivadores y atractivos para mantener el compromiso del estudiante.",
	},
];

/// Language learning final project: research through development.
pub static FINAL_PROJECT: [NodeRecord; 5] = [
	NodeRecord {
		phase: "Investigación de Usuarios",
		description: "La fase inicial se centró en comprender las necesidades, motivaciones y frustraciones de los usuarios al aprender un nuevo idioma a través de entrevistas semi-estructuradas y cuestionarios específicos.",
		achievements: &[
			"4 entrevistas realizadas (3 estudiantes + 1 docente experto)",
			"Cuestionarios diferenciados por perfil",
			"Identificación de patrones de comportamiento",
			"Recopilación de puntos de dolor (pain points)",
			"Validación de hipótesis sobre aprendizaje de idiomas",
		],
		interviews: &INTERVIEWS,
		questionnaires: &QUESTIONNAIRES,
		..NodeRecord::new("1", "Entrevistas & Cuestionarios", 0.2, 0.3, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Análisis de Hallazgos",
		description: "A partir de las entrevistas y cuestionarios, se identificaron 4 necesidades clave que guían el diseño de la solución.",
		achievements: &[
			"Need #1: Formular ideas directamente en inglés",
			"Need #2: Recuperación activa de palabras",
			"Need #3: Práctica constante",
			"Need #4: Métodos motivadores y atractivos",
		],
		needs: &KEY_NEEDS,
		..NodeRecord::new("1.5", "Necesidades Identificadas", 0.35, 0.2, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Validación",
		description: "Pruebas físicas con usuarios para validar mecánicas de interacción antes del desarrollo digital.",
		achievements: &[
			"Laberinto físico simulando el juego",
			"Mecánicas de persecución y supervivencia",
			"Sistema de defensa con objetos",
			"Feedback de usuarios reales",
		],
		..NodeRecord::new("2", "Real Life Testing", 0.5, 0.5, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Diseño",
		description: "Maqueta de baja fidelidad para reconstruir el escenario y validar la experiencia de usuario.",
		achievements: &[
			"Construcción de ambiente físico",
			"Pruebas de iluminación y atmósfera",
			"Validación de interacciones multimodales",
			"Refinamiento basado en observaciones",
		],
		..NodeRecord::new("3", "Prototipo", 0.65, 0.3, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Implementación",
		description: "Desarrollo del prototipo funcional en Unity con hand tracking y mecánicas de interacción.",
		achievements: &[
			"Implementación en Unity + SteamVR",
			"Hand tracking para recolección",
			"Movimiento corporal en VR",
			"Herramientas de luz y defensa",
		],
		..NodeRecord::new("4", "Desarrollo", 0.8, 0.5, NodeStatus::InProgress)
	},
];

/// VR game roadmap, one node per week of work.
pub static VR_ROADMAP: [NodeRecord; 5] = [
	NodeRecord {
		phase: "Investigación",
		date: Some("Semana 1"),
		description: "Lluvia de ideas para definir el concepto del juego como herramienta terapéutica. Investigación de interacciones multimodales en VR.",
		achievements: &[
			"Definición del problema: Dificultad en toma de decisiones",
			"Público objetivo: Adolescentes y adultos",
			"Tecnología: Unity, SteamVR y C#",
			"Primeros bocetos de niveles oníricos",
		],
		image: Some("/brainstorm.jpeg"),
		..NodeRecord::new("1", "Aterrizaje de ideas e investigación", 0.15, 0.3, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Real Life Testing",
		date: Some("Semana 2"),
		description: "Experiencia física para validar mecánicas de interacción antes del desarrollo digital con usuarios reales.",
		achievements: &[
			"Experiencia física que simula mecánicas VR",
			"Pruebas con usuarios reales",
			"Validación de interacción gestual",
			"Documentación en video",
		],
		image: Some("/rlTest.png"),
		video_link: Some("https://drive.google.com/file/d/1yHJyLESPWRFQpGZgvCItGC0C4YkvUKdr/view?usp=drivesdk"),
		feedback: &[
			FeedbackSection {
				title: "Dirección del Proyecto",
				recommendations: &[
					"Redefinir el enfoque hacia funciones ejecutivas como planificación y toma de decisiones.",
					"Implementar dificultad progresiva basada en demandas cognitivas crecientes.",
				],
			},
			FeedbackSection {
				title: "Tips para la Primera Escena (Nivel 1: El Jardín de los Senderos)",
				recommendations: &[
					"Aumentar la tensión: Se sugiere añadir otros estímulos que evoquen miedo para hacer la experiencia más inmersiva.",
					"Empoderar al jugador: En lugar de nubes que se apartan, se recomienda dar al jugador herramientas de defensa. Esto le otorgará una mayor sensación de control sobre la situación.",
				],
			},
			FeedbackSection {
				title: "Tips para la Segunda Escena (Nivel 2: El Laberinto de Susurros)",
				recommendations: &[
					"Fomentar la planificación: Es importante poner a disposición del jugador herramientas iniciales, pero también crear desafíos específicos para obtener más herramientas. Esto obliga al usuario a planificar cómo usar sus recursos y a buscar activamente mejorar sus capacidades para superar los obstáculos.",
				],
			},
		],
		..NodeRecord::new("2", "Real Life Testing", 0.32, 0.45, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Diseño y Validación",
		date: Some("Semana 2"),
		description: "Prototipo de baja fidelidad. Laberinto físico con persecución y defensa mediante objetos encontrados.",
		achievements: &[
			"Laberinto físico simulando el juego",
			"Mecánicas de persecución y supervivencia",
			"Sistema de defensa con objetos",
			"Refinamiento basado en observaciones",
		],
		image: Some("/maqueta.jpeg"),
		video_link: Some("https://drive.google.com/file/d/1YOwZN7ul7dXW16Q1vSBvgzXWf4TsYNlp/view?usp=drive_link"),
		feedback: &[
			FeedbackSection {
				title: "Problemas Identificados en las Pruebas Iniciales",
				recommendations: &[
					"Se identificaron varios problemas clave durante las pruebas iniciales, principalmente relacionados con los principios de Visibilidad y Feedback:",
				],
			},
			FeedbackSection {
				title: "Falta de Claridad en los Objetivos",
				recommendations: &[
					"No estaba claro cuál era la salida o el objetivo principal en las primeras versiones de los niveles.",
				],
			},
			FeedbackSection {
				title: "Elementos del Juego Confusos",
				recommendations: &[
					"Los usuarios no entendían que las 'bolitas' eran en realidad obstáculos.",
				],
			},
			FeedbackSection {
				title: "Atmósfera Deficiente",
				recommendations: &[
					"La música no lograba generar una sensación de suspenso o misterio, lo cual restaba impacto a la experiencia.",
				],
			},
			FeedbackSection {
				title: "Mecánicas sin Propósito Claro",
				recommendations: &[
					"La idea de las nubes y las luces no parecía tener una conexión directa con la solución del problema central del juego.",
				],
			},
		],
		..NodeRecord::new("3", "Realización de maqueta y validación", 0.49, 0.3, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Desarrollo",
		date: Some("Semana 3-4"),
		description: "Prototipo funcional en Unity. Implementación de hand tracking para interacciones naturales e intuitivas.",
		achievements: &[
			"Hand tracking para herramientas de luz",
			"Primer nivel: El Jardín de los Senderos",
			"Estímulos de miedo y control",
			"Movimiento corporal e interacción gestual",
		],
		image: Some("/vr-prototype-development-unity-editor-interface.jpg"),
		..NodeRecord::new("4", "Prototipado y Desarrollo", 0.66, 0.45, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Demostración",
		date: Some("Semana 5"),
		description: "Experiencia completa del juego VR en acción. Observa cómo las mecánicas, interacciones y atmósfera cobran vida.",
		achievements: &[
			"Video demostrativo completo del gameplay",
			"Muestra de todas las mecánicas implementadas",
			"Experiencia inmersiva en realidad virtual",
			"Validación del concepto final",
		],
		image: Some("/game-simulation-thumbnail.png"),
		videos: &[
			Video {
				title: "Escenario: Victoria",
				url: "https://youtu.be/pg3VO4VGZ1Q",
				embed_id: "pg3VO4VGZ1Q",
			},
			Video {
				title: "Escenario: Derrota",
				url: "https://youtu.be/54H9Fpn50_0",
				embed_id: "54H9Fpn50_0",
			},
		],
		..NodeRecord::new("5", "Simulación del Juego", 0.83, 0.3, NodeStatus::Completed)
	},
];

/// Development phases listed under the rock field on the VR game page.
pub static VR_GAME_PHASES: [NodeRecord; 3] = [
	NodeRecord {
		phase: "Investigación",
		date: Some("Semana 1"),
		description: "En esta primera parte se hizo una lluvia de ideas para definir el concepto del juego, centrado en ser una herramienta para contextos terapéuticos. Se investigaron interacciones multimodales (gestos) y su aplicación en VR para el desarrollo de funciones ejecutivas.",
		achievements: &[
			"Definición del problema: Dificultad en toma de decisiones y gestión de pensamientos catastróficos.",
			"Público objetivo: Adolescentes y adultos, para ser usado con acompañamiento profesional.",
			"Establecimiento de la tecnología: Unity, SteamVR y C#.",
			"Primeros bocetos de los niveles oníricos del juego.",
		],
		image: Some("/brainstorm.jpeg"),
		..NodeRecord::new("1", "Aterrizaje de ideas e investigación", 0.125, 0.5, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Diseño y Validación",
		date: Some("Semana 2"),
		description: "Se realizó una prueba de concepto ('live action') con usuarios reales ajenos al proyecto para recibir feedback temprano sobre las mecánicas propuestas, validar la idea y ajustar el diseño de interacción antes de la fase de desarrollo.",
		achievements: &[
			"Validación del concepto de interacciones multimodales (gestos).",
			"Diseño de la narrativa a través de 3 niveles enfocados en funciones ejecutivas.",
			"Creación de storyboards para las interacciones clave del gameplay.",
			"Refinamiento de las mecánicas para incrementar la dificultad progresivamente.",
		],
		image: Some("/maqueta.jpeg"),
		..NodeRecord::new("2", "Realización de maqueta y validación de la idea", 0.375, 0.5, NodeStatus::Completed)
	},
	NodeRecord {
		phase: "Desarrollo",
		date: Some("Semana 3-4"),
		description: "Se construyó un prototipo funcional en Unity para testear las mecánicas de interacción principales. El foco fue implementar el hand tracking para asegurar que las interacciones fueran naturales e intuitivas.",
		achievements: &[
			"Desarrollo del hand tracking para manipular herramientas de luz y recolectar objetos.",
			"Creación del primer nivel: 'El Jardín de los Senderos que se Bifurcan'.",
			"Diseño de los estímulos de miedo y la sensación de control a través de herramientas de defensa.",
			"Implementación de mecánicas de movimiento corporal e interacción gestual.",
		],
		image: Some("/vr-prototype-development-unity-editor-interface.jpg"),
		..NodeRecord::new("3", "Prototipado y Desarrollo de Interacciones", 0.625, 0.5, NodeStatus::InProgress)
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coordinates_are_normalised() {
		for node in FINAL_PROJECT.iter().chain(&VR_ROADMAP).chain(&VR_GAME_PHASES) {
			assert!((0.0..=1.0).contains(&node.x), "{}", node.id);
			assert!((0.0..=1.0).contains(&node.y), "{}", node.id);
		}
	}

	#[test]
	fn only_last_final_project_node_is_in_progress() {
		let statuses: Vec<_> = FINAL_PROJECT.iter().map(|n| n.status).collect();
		assert_eq!(statuses[..4], [NodeStatus::Completed; 4]);
		assert_eq!(statuses[4], NodeStatus::InProgress);
	}

	#[test]
	fn missing_photo_is_optional() {
		assert!(INTERVIEWS.iter().any(|i| i.image.is_none()));
	}
}
