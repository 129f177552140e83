//! Static page content.

/// A page section reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
	/// Element id, also the link fragment
	pub id: &'static str,
	/// Link text
	pub title: &'static str,
}

/// A product variant shown as a card and offered in the customization form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
	/// Form value
	pub id: &'static str,
	/// Display name
	pub name: &'static str,
	/// Card text
	pub description: &'static str,
	/// Card image
	pub image: &'static str,
}

/// One carousel image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
	/// Image source
	pub src: &'static str,
	/// Alternative text
	pub alt: &'static str,
}

/// Sections in document order.
pub const SECTIONS: &[Section] = &[
	Section {
		id: "presentation",
		title: "Présentation",
	},
	Section {
		id: "variantes",
		title: "Variantes",
	},
	Section {
		id: "galerie",
		title: "Galerie",
	},
	Section {
		id: "personnalisation",
		title: "Personnalisation",
	},
	Section {
		id: "diagramme",
		title: "Diagramme",
	},
	Section {
		id: "contact",
		title: "Contact",
	},
];

/// Product variants.
pub const VARIANTS: &[Variant] = &[
	Variant {
		id: "classic",
		name: "Classique",
		description: "Le modèle d'origine, sobre et robuste.",
		image: "assets/variant-classic.jpg",
	},
	Variant {
		id: "sport",
		name: "Sport",
		description: "Plus léger, pensé pour le mouvement.",
		image: "assets/variant-sport.jpg",
	},
	Variant {
		id: "premium",
		name: "Premium",
		description: "Finitions haut de gamme et gravure offerte.",
		image: "assets/variant-premium.jpg",
	},
];

/// Carousel images.
pub const SLIDES: &[Slide] = &[
	Slide {
		src: "assets/slide-1.jpg",
		alt: "Vue de face",
	},
	Slide {
		src: "assets/slide-2.jpg",
		alt: "Vue de profil",
	},
	Slide {
		src: "assets/slide-3.jpg",
		alt: "Détail des finitions",
	},
];

/// Image shown in the zoomable viewer.
pub const MAIN_IMAGE: &str = "assets/main.jpg";
