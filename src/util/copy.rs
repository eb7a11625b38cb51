//! User-facing copy for the auth page.
//!
//! DESIGN
//! ======
//! Every string the page can show lives here: the randomized variant tables,
//! the fixed status lines, and the friendly rewording of known server
//! messages. Selection is left to `util::picker` so tests can pin it.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

/// Display name used when the server or storage does not supply one.
pub const DEFAULT_USER_NAME: &str = "User";

/// Placeholder replaced by `fill_name` in greeting templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

pub const REGISTER_FIELDS_REQUIRED: &str = "All fields are required (yes, every single one)";
pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are both required (shocking, we know)";

pub const REGISTER_SUCCESS: &str = "Account created! You're officially part of the club now.";
pub const LOGIN_SUCCESS: &str = "Login successful! Hold on to your hat!";
pub const REGISTER_BANNER: &str = "Account created! Time to show off those login skills!";

pub const REGISTER_FALLBACK: &str = "Something went wrong. Technology, am I right?";
pub const LOGIN_FALLBACK: &str = "Login failed. The keys to the kingdom remain elusive.";

pub const REGISTER_SERVER_DOWN: &str =
    "Our servers are having an existential crisis. Please try again.";
pub const LOGIN_SERVER_DOWN: &str =
    "Our servers are currently taking a coffee break. Please try again.";

/// Families of interchangeable messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageCategory {
    /// Shown while a submission is pending.
    Loading,
    /// Tagline under the login form, picked once per page load.
    LoginWitty,
    /// Tagline under the register form, picked once per page load.
    RegisterWitty,
    /// Banner after a successful login. Templates take `{name}`.
    Welcome,
    /// Banner on page load for a remembered user. Templates take `{name}`.
    WelcomeBack,
}

const LOADING: &[&str] = &[
    "Brewing coffee for the server hamsters...",
    "Warming up the login processors...",
    "Dusting off your account details...",
    "Searching for your data in the cloud...",
    "Convincing the AI not to take over the world...",
    "Untangling the internet tubes...",
    "Herding bytes into their proper places...",
];

const LOGIN_WITTY: &[&str] = &[
    "Passwords are like underwear... make them mysterious but don't share them!",
    "Login attempts are like first dates - sometimes they need a second try.",
    "Your password is like a toothbrush. Choose a good one, change it regularly, and don't share it!",
    "Hackers don't break in through the front door - unless you leave it unlocked.",
    "If your password is 'password', maybe reconsider your life choices.",
];

const REGISTER_WITTY: &[&str] = &[
    "Don't worry, we won't judge your password strength (but our algorithm might)",
    "Creating an account is like planting a tree - do it once, enjoy it for years.",
    "We promise to keep your data safer than your secrets in a group chat",
    "Your email is safe with us (we won't sell it... for less than a million dollars)",
    "Your account will be more secure than that sandwich in the office fridge",
];

const WELCOME: &[&str] = &[
    "Welcome back, {name}! We've missed you terribly.",
    "{name} has entered the chat!",
    "The prodigal {name} returns!",
    "Welcome back! Your inbox has been crying without you, {name}.",
];

const WELCOME_BACK: &[&str] = &[
    "{name} is back! Hide the good snacks!",
    "Look who it is! {name} has returned!",
    "{name} is back! We already have your usual ready.",
    "Welcome back, {name}! We promise we didn't touch anything.",
];

/// All variants for `category`. Never empty.
#[must_use]
pub fn variants(category: MessageCategory) -> &'static [&'static str] {
    match category {
        MessageCategory::Loading => LOADING,
        MessageCategory::LoginWitty => LOGIN_WITTY,
        MessageCategory::RegisterWitty => REGISTER_WITTY,
        MessageCategory::Welcome => WELCOME,
        MessageCategory::WelcomeBack => WELCOME_BACK,
    }
}

/// Substitute `name` into a greeting template.
#[must_use]
pub fn fill_name(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

/// Friendly rewording of a known registration failure, if any.
#[must_use]
pub fn friendly_register_error(server_message: &str) -> Option<&'static str> {
    match server_message {
        "Email already exists" => {
            Some("This email is already taken. Are you trying to clone yourself?")
        }
        "Invalid email format" => Some(
            "That doesn't look like an email. We need something with an @ symbol (and preferably a dot).",
        ),
        "Password too weak" => {
            Some("That password is weaker than a paper umbrella. Try something stronger!")
        }
        _ => None,
    }
}

/// Friendly rewording of a known login failure, if any.
#[must_use]
pub fn friendly_login_error(server_message: &str) -> Option<&'static str> {
    match server_message {
        "Invalid credentials" => {
            Some("That email/password combo is like oil and water - they don't mix.")
        }
        "User not found" => {
            Some("We looked everywhere, but couldn't find you. Are you sure you exist?")
        }
        "Account locked" => {
            Some("Your account is on time-out. It needs to think about what it did.")
        }
        _ => None,
    }
}
