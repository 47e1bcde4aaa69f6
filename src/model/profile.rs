//! Dashboard profile and account settings
//!
//! Kept in memory for the session. Saving only logs the profile.

/// Longest username accepted, in characters
pub const USERNAME_MAX: usize = 20;

/// Longest bio accepted, in characters
pub const BIO_MAX: usize = 200;

/// Editable text fields of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Email,
    Location,
    Website,
    Twitter,
    Instagram,
    Bio,
}

impl ProfileField {
    pub fn all() -> Vec<ProfileField> {
        vec![
            ProfileField::Username,
            ProfileField::Email,
            ProfileField::Location,
            ProfileField::Website,
            ProfileField::Twitter,
            ProfileField::Instagram,
            ProfileField::Bio,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            ProfileField::Username => "Nombre de usuario",
            ProfileField::Email => "Email",
            ProfileField::Location => "Ubicación",
            ProfileField::Website => "Sitio web",
            ProfileField::Twitter => "Twitter",
            ProfileField::Instagram => "Instagram",
            ProfileField::Bio => "Biografía",
        }
    }

    pub fn placeholder(&self) -> &str {
        match self {
            ProfileField::Username => "Tu nombre único",
            ProfileField::Email => "tu@email.com",
            ProfileField::Location => "Ciudad, País",
            ProfileField::Website => "https://tuweb.com",
            ProfileField::Twitter | ProfileField::Instagram => "@tu_usuario",
            ProfileField::Bio => "Cuéntanos sobre ti...",
        }
    }

    pub fn max_len(&self) -> Option<usize> {
        match self {
            ProfileField::Username => Some(USERNAME_MAX),
            ProfileField::Bio => Some(BIO_MAX),
            _ => None,
        }
    }
}

/// On/off preferences shown on the settings tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    EmailNotifications,
    PushNotifications,
    SmsNotifications,
    Marketing,
    ShowEmail,
    ShowLocation,
    ShowActivity,
}

impl Setting {
    pub fn all() -> Vec<Setting> {
        vec![
            Setting::EmailNotifications,
            Setting::PushNotifications,
            Setting::SmsNotifications,
            Setting::Marketing,
            Setting::ShowEmail,
            Setting::ShowLocation,
            Setting::ShowActivity,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Setting::EmailNotifications => "Notificaciones por Email",
            Setting::PushNotifications => "Notificaciones Push",
            Setting::SmsNotifications => "Notificaciones SMS",
            Setting::Marketing => "Emails de Marketing",
            Setting::ShowEmail => "Mostrar Email Público",
            Setting::ShowLocation => "Mostrar Ubicación",
            Setting::ShowActivity => "Mostrar Actividad",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Setting::EmailNotifications => "Recibe actualizaciones de tus eventos por email",
            Setting::PushNotifications => "Recibe notificaciones en tu navegador",
            Setting::SmsNotifications => "Recibe recordatorios por mensaje de texto",
            Setting::Marketing => "Recibe promociones y eventos recomendados",
            Setting::ShowEmail => "Otros usuarios pueden ver tu email",
            Setting::ShowLocation => "Otros usuarios pueden ver tu ubicación",
            Setting::ShowActivity => "Otros usuarios pueden ver tu actividad reciente",
        }
    }

    /// Belongs to the privacy group rather than notifications
    pub fn is_privacy(&self) -> bool {
        matches!(
            self,
            Setting::ShowEmail | Setting::ShowLocation | Setting::ShowActivity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub marketing: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            marketing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacySettings {
    pub show_email: bool,
    pub show_location: bool,
    pub show_activity: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_email: false,
            show_location: true,
            show_activity: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    pub twitter: String,
    pub instagram: String,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
}

impl UserProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::Email => &self.email,
            ProfileField::Location => &self.location,
            ProfileField::Website => &self.website,
            ProfileField::Twitter => &self.twitter,
            ProfileField::Instagram => &self.instagram,
            ProfileField::Bio => &self.bio,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Username => &mut self.username,
            ProfileField::Email => &mut self.email,
            ProfileField::Location => &mut self.location,
            ProfileField::Website => &mut self.website,
            ProfileField::Twitter => &mut self.twitter,
            ProfileField::Instagram => &mut self.instagram,
            ProfileField::Bio => &mut self.bio,
        }
    }

    /// Append a character unless the field is full. Returns whether it was added.
    pub fn push_char(&mut self, field: ProfileField, c: char) -> bool {
        let value = self.field_mut(field);
        if field.max_len().is_some_and(|max| value.chars().count() >= max) {
            return false;
        }
        value.push(c);
        true
    }

    pub fn pop_char(&mut self, field: ProfileField) {
        self.field_mut(field).pop();
    }

    pub fn setting(&self, setting: Setting) -> bool {
        match setting {
            Setting::EmailNotifications => self.notifications.email,
            Setting::PushNotifications => self.notifications.push,
            Setting::SmsNotifications => self.notifications.sms,
            Setting::Marketing => self.notifications.marketing,
            Setting::ShowEmail => self.privacy.show_email,
            Setting::ShowLocation => self.privacy.show_location,
            Setting::ShowActivity => self.privacy.show_activity,
        }
    }

    /// Flip a setting, returning its new value
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let slot = match setting {
            Setting::EmailNotifications => &mut self.notifications.email,
            Setting::PushNotifications => &mut self.notifications.push,
            Setting::SmsNotifications => &mut self.notifications.sms,
            Setting::Marketing => &mut self.notifications.marketing,
            Setting::ShowEmail => &mut self.privacy.show_email,
            Setting::ShowLocation => &mut self.privacy.show_location,
            Setting::ShowActivity => &mut self.privacy.show_activity,
        };
        *slot = !*slot;
        *slot
    }

    /// Username, or "Usuario" plus the last four characters of the wallet
    pub fn display_name(&self, wallet: Option<&str>) -> String {
        if !self.username.trim().is_empty() {
            return self.username.clone();
        }
        let tail: String = wallet
            .map(|w| {
                let chars: Vec<char> = w.chars().collect();
                chars[chars.len().saturating_sub(4)..].iter().collect()
            })
            .unwrap_or_default();
        format!("Usuario {}", tail).trim_end().to_string()
    }

    /// Avatar letter: first of the username, else the first after the wallet's "0x"
    pub fn initial(&self, wallet: Option<&str>) -> char {
        self.username
            .chars()
            .next()
            .or_else(|| wallet.and_then(|w| w.chars().nth(2)))
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('U')
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "0xab12cd34ef56";

    #[test]
    fn test_default_settings() {
        let profile = UserProfile::default();
        assert!(profile.setting(Setting::EmailNotifications));
        assert!(profile.setting(Setting::PushNotifications));
        assert!(!profile.setting(Setting::SmsNotifications));
        assert!(!profile.setting(Setting::Marketing));
        assert!(!profile.setting(Setting::ShowEmail));
        assert!(profile.setting(Setting::ShowLocation));
        assert!(profile.setting(Setting::ShowActivity));
    }

    #[test]
    fn test_username_and_bio_limits() {
        let mut profile = UserProfile::default();
        for _ in 0..25 {
            profile.push_char(ProfileField::Username, 'ñ');
        }
        assert_eq!(profile.username.chars().count(), USERNAME_MAX);
        assert!(!profile.push_char(ProfileField::Username, 'a'));

        for _ in 0..BIO_MAX {
            assert!(profile.push_char(ProfileField::Bio, 'x'));
        }
        assert!(!profile.push_char(ProfileField::Bio, 'x'));

        for _ in 0..300 {
            profile.push_char(ProfileField::Website, 'w');
        }
        assert_eq!(profile.website.len(), 300);

        profile.pop_char(ProfileField::Username);
        assert!(profile.push_char(ProfileField::Username, 'a'));
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut profile = UserProfile::default();
        assert!(profile.toggle(Setting::SmsNotifications));
        assert!(!profile.toggle(Setting::ShowActivity));
        assert!(profile.notifications.sms);
        assert!(!profile.privacy.show_activity);
        assert_eq!(
            Setting::all().iter().filter(|s| s.is_privacy()).count(),
            3
        );
    }

    #[test]
    fn test_display_name_and_initial() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.display_name(Some(WALLET)), "Usuario ef56");
        assert_eq!(profile.display_name(None), "Usuario");
        assert_eq!(profile.initial(Some(WALLET)), 'A');
        assert_eq!(profile.initial(None), 'U');

        profile.username = "lucía".to_string();
        assert_eq!(profile.display_name(Some(WALLET)), "lucía");
        assert_eq!(profile.initial(Some(WALLET)), 'L');
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut profile = UserProfile::default();
        profile.push_char(ProfileField::Email, 'a');
        profile.toggle(Setting::Marketing);
        profile.reset();
        assert_eq!(profile, UserProfile::default());
    }
}
