//! Page dictionary with Spanish fallback
//!
//! # Invariants
//!
//! 1. **Fallback terminates**: a lookup tries the requested language, then
//!    Spanish, then returns `None`.
//!
//! 2. **Complete chrome**: both languages define the page title and meta
//!    description, so [`Dictionary::page_title`] never falls through.
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Missing key in English | Spanish text |
//! | Missing key everywhere | `None`; the element keeps its text |
//! | Unknown stored language | Default language (Spanish) |

use crate::error::PageError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key of the document title entry
pub const PAGE_TITLE: &str = "pageTitle";

/// Key of the meta description entry
pub const META_DESCRIPTION: &str = "metaDescription";

/// Supported page languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Every supported language, default first
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    /// BCP 47 code, also the stored preference value
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Parse an exact language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Interpret a stored preference, falling back to `default` for
    /// missing or unknown codes
    pub fn from_stored(value: Option<&str>, default: Language) -> Self {
        value.and_then(Language::from_code).unwrap_or(default)
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::from_code(code).ok_or_else(|| PageError::UnknownLanguage(code.to_string()))
    }
}

/// Strings for every supported language
#[derive(Clone, Debug)]
pub struct Catalog {
    es: FxHashMap<&'static str, &'static str>,
    en: FxHashMap<&'static str, &'static str>,
}

impl Catalog {
    /// The portfolio page's built-in strings
    pub fn builtin() -> Self {
        Self {
            es: ES.iter().copied().collect(),
            en: EN.iter().copied().collect(),
        }
    }

    fn strings(&self, language: Language) -> &FxHashMap<&'static str, &'static str> {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }

    /// Look up `key` for `language`, falling back to Spanish
    pub fn get(&self, language: Language, key: &str) -> Option<&'static str> {
        self.strings(language)
            .get(key)
            .or_else(|| self.es.get(key))
            .copied()
            .filter(|text| !text.is_empty())
    }

    /// Number of keys defined for `language`
    pub fn len(&self, language: Language) -> usize {
        self.strings(language).len()
    }

    /// Keys defined in either language, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.es.keys().chain(self.en.keys()).copied().collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// View of the catalog for one language
    pub fn dictionary(&self, language: Language) -> Dictionary<'_> {
        Dictionary {
            catalog: self,
            language,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Catalog lookups for a single language
#[derive(Clone, Copy, Debug)]
pub struct Dictionary<'a> {
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> Dictionary<'a> {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.catalog.get(self.language, key)
    }

    pub fn page_title(&self) -> Option<&'static str> {
        self.get(PAGE_TITLE)
    }

    pub fn meta_description(&self) -> Option<&'static str> {
        self.get(META_DESCRIPTION)
    }
}

const ES: &[(&str, &str)] = &[
    (PAGE_TITLE, "Tu Nombre — Portafolio"),
    (META_DESCRIPTION, "Portafolio de diseñador UI/UX y desarrollador frontend."),
    ("hero.eyebrow", "Diseño UI/UX + Frontend"),
    ("hero.title", "Creo experiencias digitales claras, rápidas y con enfoque en negocio."),
    ("hero.lead", "Soy diseñador y desarrollador frontend. Me especializo en interfaces modernas, sistemas de diseño y productos web escalables."),
    ("hero.ctaProjects", "Ver proyectos"),
    ("hero.ctaContact", "Escríbeme"),
    ("projects.title", "Proyectos"),
    ("projects.viewAll", "Ver todos"),
    ("projects.caseStudy", "Ver caso"),
    ("projects.card1.tag", "UI/UX · Frontend"),
    ("projects.card1.title", "Dashboard SaaS"),
    ("projects.card1.text", "Diseño y desarrollo de una plataforma analítica con métricas en tiempo real y flujos optimizados."),
    ("projects.card2.tag", "Web App"),
    ("projects.card2.title", "Sistema de Reservas"),
    ("projects.card2.text", "Producto responsive para gestión de reservas con foco en conversión y experiencia de uso."),
    ("projects.card3.tag", "Design System"),
    ("projects.card3.title", "Biblioteca de Componentes"),
    ("projects.card3.text", "Creación de componentes reutilizables para reducir tiempos de desarrollo y mantener consistencia visual."),
    ("experience.title", "Experiencia"),
    ("experience.present", "Actual"),
    ("experience.item1.role", "Product Designer & Frontend — Empresa Actual"),
    ("experience.item1.text", "Diseño de producto, prototipado y desarrollo de interfaces."),
    ("experience.item2.role", "UI Designer — Agencia Digital"),
    ("experience.item2.text", "Landing pages, e-commerce y optimización de conversión."),
    ("experience.item3.role", "Freelance — Diseño y desarrollo web"),
    ("experience.item3.text", "Proyectos para marcas personales y negocios locales."),
    ("articles.title", "Últimos artículos"),
    ("articles.goBlog", "Ir al blog"),
    ("articles.item1.date", "18 ene 2026"),
    ("articles.item1.title", "Mi stack de IA para diseño y desarrollo"),
    ("articles.item2.date", "17 nov 2025"),
    ("articles.item2.title", "Sistema de espaciado con grid de 8pt"),
    ("articles.item3.date", "04 nov 2025"),
    ("articles.item3.title", "Contraste de color y accesibilidad WCAG"),
    ("footer.title", "¿Trabajamos juntos?"),
    ("dock.nav", "Barra rápida"),
    ("dock.home", "Inicio"),
    ("dock.profile", "Perfil"),
    ("dock.articles", "Artículos"),
    ("dock.code", "Código"),
    ("dock.layers", "Capas"),
    ("dock.theme", "Cambiar tema"),
    ("dock.sound", "Sonido"),
    ("dock.language", "Idioma"),
];

const EN: &[(&str, &str)] = &[
    (PAGE_TITLE, "Your Name — Portfolio"),
    (META_DESCRIPTION, "Portfolio of a UI/UX designer and frontend developer."),
    ("hero.eyebrow", "UI/UX Design + Frontend"),
    ("hero.title", "I build clear, fast digital experiences focused on business impact."),
    ("hero.lead", "I am a designer and frontend developer focused on modern interfaces, design systems, and scalable web products."),
    ("hero.ctaProjects", "View projects"),
    ("hero.ctaContact", "Contact me"),
    ("projects.title", "Projects"),
    ("projects.viewAll", "View all"),
    ("projects.caseStudy", "View case study"),
    ("projects.card1.tag", "UI/UX · Frontend"),
    ("projects.card1.title", "SaaS Dashboard"),
    ("projects.card1.text", "Design and development of an analytics platform with real-time metrics and optimized flows."),
    ("projects.card2.tag", "Web App"),
    ("projects.card2.title", "Booking System"),
    ("projects.card2.text", "Responsive product for reservation management focused on conversion and usability."),
    ("projects.card3.tag", "Design System"),
    ("projects.card3.title", "Component Library"),
    ("projects.card3.text", "Creation of reusable components to reduce development time and keep visual consistency."),
    ("experience.title", "Experience"),
    ("experience.present", "Present"),
    ("experience.item1.role", "Product Designer & Frontend — Current Company"),
    ("experience.item1.text", "Product design, prototyping, and interface development."),
    ("experience.item2.role", "UI Designer — Digital Agency"),
    ("experience.item2.text", "Landing pages, e-commerce, and conversion optimization."),
    ("experience.item3.role", "Freelance — Web design and development"),
    ("experience.item3.text", "Projects for personal brands and local businesses."),
    ("articles.title", "Latest articles"),
    ("articles.goBlog", "Go to blog"),
    ("articles.item1.date", "Jan 18, 2026"),
    ("articles.item1.title", "My AI stack for design and development"),
    ("articles.item2.date", "Nov 17, 2025"),
    ("articles.item2.title", "8pt spacing system guide"),
    ("articles.item3.date", "Nov 04, 2025"),
    ("articles.item3.title", "Color contrast and WCAG accessibility"),
    ("footer.title", "Shall we work together?"),
    ("dock.nav", "Quick dock"),
    ("dock.home", "Home"),
    ("dock.profile", "Profile"),
    ("dock.articles", "Articles"),
    ("dock.code", "Code"),
    ("dock.layers", "Layers"),
    ("dock.theme", "Toggle theme"),
    ("dock.sound", "Sound"),
    ("dock.language", "Language"),
];
