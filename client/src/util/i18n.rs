//! Localized message catalog and locale preference.
//!
//! Messages are looked up by string id. A locale missing a translation
//! falls back to English; an id missing everywhere renders as the id itself
//! so untranslated strings stay visible instead of disappearing.
//!
//! TRADE-OFFS
//! ==========
//! The catalog is compiled in as static tables. Three locales and a few
//! dozen ids do not justify runtime bundle loading.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "unit_console_locale";

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
    Es,
}

impl Locale {
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Es];

    /// Two-letter language code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    /// Language name in its own language, for the selector.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Es => "Español",
        }
    }

    /// Parse a BCP-47 tag by its primary subtag (`fr-CA` -> `Fr`).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    fn catalog(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Fr => FR,
            Self::Es => ES,
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("submitting", "submitting"),
    ("edited", "edited"),
    ("update", "Update"),
    ("edit", "Edit"),
    ("units", "Units"),
    ("unit.id", "ID"),
    ("name", "Name"),
    ("identifier", "Identifier"),
    ("unit.represent", "Unit Represent"),
    ("sec.in.rate", "Sec in Rate"),
    ("type.of.unit", "Type of Unit"),
    ("unit.suffix", "Suffix"),
    ("displayable", "Displayable"),
    ("unit.preferred.display", "Preferred Display"),
    ("note", "Note"),
    ("unsaved.warning", "You have unsaved change(s). Are you sure you want to leave?"),
    ("leave", "Leave"),
    ("save.all", "Save all"),
    ("cancel", "Cancel"),
    ("unsaved.failure", "Changes failed to save"),
    ("units.failed.to.fetch", "Failed to fetch units"),
    ("log.in", "Log in"),
    ("log.out", "Log out"),
    ("language", "Language"),
    ("loading", "Loading..."),
    ("no.units", "No units to display"),
    ("yes", "yes"),
    ("no", "no"),
    ("quantity", "quantity"),
    ("flow", "flow"),
    ("raw", "raw"),
    ("unused", "unused"),
    ("unit", "unit"),
    ("meter", "meter"),
    ("suffix", "suffix"),
    ("none", "none"),
    ("all", "all"),
    ("admin", "admin"),
];

const FR: &[(&str, &str)] = &[
    ("submitting", "en cours d'envoi"),
    ("edited", "modifié"),
    ("update", "Mettre à jour"),
    ("edit", "Modifier"),
    ("units", "Unités"),
    ("unit.id", "ID"),
    ("name", "Nom"),
    ("identifier", "Identifiant"),
    ("unit.represent", "Représentation de l'unité"),
    ("sec.in.rate", "Secondes par période"),
    ("type.of.unit", "Type d'unité"),
    ("unit.suffix", "Suffixe"),
    ("displayable", "Affichable"),
    ("unit.preferred.display", "Affichage préféré"),
    ("note", "Note"),
    ("unsaved.warning", "Vous avez des modifications non enregistrées. Voulez-vous vraiment quitter?"),
    ("leave", "Quitter"),
    ("save.all", "Tout enregistrer"),
    ("cancel", "Annuler"),
    ("unsaved.failure", "Échec de l'enregistrement des modifications"),
    ("units.failed.to.fetch", "Impossible de récupérer les unités"),
    ("log.in", "Se connecter"),
    ("log.out", "Se déconnecter"),
    ("language", "Langue"),
    ("loading", "Chargement..."),
    ("no.units", "Aucune unité à afficher"),
    ("yes", "oui"),
    ("no", "non"),
    ("quantity", "quantité"),
    ("flow", "débit"),
    ("raw", "brut"),
    ("unused", "inutilisé"),
    ("unit", "unité"),
    ("meter", "compteur"),
    ("suffix", "suffixe"),
    ("none", "aucun"),
    ("all", "tous"),
    ("admin", "admin"),
];

const ES: &[(&str, &str)] = &[
    ("submitting", "enviando"),
    ("edited", "editado"),
    ("update", "Actualizar"),
    ("edit", "Editar"),
    ("units", "Unidades"),
    ("unit.id", "ID"),
    ("name", "Nombre"),
    ("identifier", "Identificador"),
    ("unit.represent", "Representación de la unidad"),
    ("sec.in.rate", "Segundos en la tasa"),
    ("type.of.unit", "Tipo de unidad"),
    ("unit.suffix", "Sufijo"),
    ("displayable", "Visible"),
    ("unit.preferred.display", "Visualización preferida"),
    ("note", "Nota"),
    ("unsaved.warning", "Tiene cambios sin guardar. ¿Está seguro de que quiere salir?"),
    ("leave", "Salir"),
    ("save.all", "Guardar todo"),
    ("cancel", "Cancelar"),
    ("unsaved.failure", "No se pudieron guardar los cambios"),
    ("units.failed.to.fetch", "No se pudieron obtener las unidades"),
    ("log.in", "Iniciar sesión"),
    ("log.out", "Cerrar sesión"),
    ("language", "Idioma"),
    ("loading", "Cargando..."),
    ("no.units", "No hay unidades para mostrar"),
    ("yes", "sí"),
    ("no", "no"),
    ("quantity", "cantidad"),
    ("flow", "flujo"),
    ("raw", "crudo"),
    ("unused", "sin usar"),
    ("unit", "unidad"),
    ("meter", "medidor"),
    ("suffix", "sufijo"),
    ("none", "ninguno"),
    ("all", "todos"),
    ("admin", "admin"),
];

fn lookup(locale: Locale, id: &str) -> Option<&'static str> {
    locale.catalog().iter().find(|(key, _)| *key == id).map(|(_, text)| *text)
}

/// Format the message `id` for `locale`.
#[must_use]
pub fn format_message(locale: Locale, id: &str) -> String {
    lookup(locale, id)
        .or_else(|| lookup(Locale::En, id))
        .map_or_else(|| id.to_owned(), str::to_owned)
}

/// Read the locale preference: stored choice first, then the browser language.
pub fn read_preference() -> Locale {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Locale::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(locale) = Locale::from_tag(&val) {
                    return locale;
                }
            }
        }

        window
            .navigator()
            .language()
            .and_then(|tag| Locale::from_tag(&tag))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Locale::default()
    }
}

/// Persist the locale choice to localStorage.
pub fn persist(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, locale.code());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}
