// DOM hooks and page-level tuning.
//
// Every selector the page behaviours depend on lives here; a missing target
// simply disables the matching feature.

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";

// Sound bindings (installed after the first click)
pub const CLICK_SOUND_SELECTOR: &str = ".btn, .social-link, .nav-link, .cert-card, .project-link";
pub const HOVER_SOUND_SELECTOR: &str = ".skill-card, .project-card, .cert-card, .stat-badge";

// Reveal
pub const REVEAL_SELECTOR: &str =
    ".skill-card, .project-card, .timeline-item, .contact-card, .about-content, .stat";
pub const STAGGER_REVEAL_SELECTOR: &str =
    ".skill-card, .project-card, .timeline-item, .contact-card, .cert-card";
pub const REVEAL_CLASSES: [&str; 2] = ["reveal", "active"];
pub const STAGGER_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";
pub const REVEAL_CSS: &str = "\
.skill-card, .project-card, .timeline-item, .contact-card, .about-content, .stat {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.skill-card.active, .project-card.active, .timeline-item.active,
.contact-card.active, .about-content.active, .stat.active {
    opacity: 1;
    transform: translateY(0);
}
";

// Rotator and name colors
pub const MORPH_TEXT_SELECTOR: &str = ".morph-text";
pub const DYNAMIC_NAME_ID: &str = "dynamic-name";
pub const DYNAMIC_LETTER_SELECTOR: &str = ".dynamic-letter";
pub const NAME_COLOR_PERIOD_MS: u64 = 1000;

// Decorations
pub const PARTICLES_ID: &str = "particles";
pub const SPARKLE_CONTAINER_ID: &str = "sparkle-container";
pub const BURST_CONTAINER_ID: &str = "rasengan-container";
pub const EXTERNAL_LINK_SELECTOR: &str = "a[target=\"_blank\"]";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const PROFILE_IMAGE_SELECTOR: &str = ".image-wrapper";
pub const PROFILE_HOVER_SCALE: &str = "scale(1.05)";
pub const PROFILE_REST_SCALE: &str = "scale(1)";
pub const PROFILE_TRANSITION: &str = "transform 0.3s ease";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FIELD_NAME_ID: &str = "name";
pub const FIELD_EMAIL_ID: &str = "email";
pub const FIELD_SUBJECT_ID: &str = "subject";
pub const FIELD_MESSAGE_ID: &str = "message";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

// Optional JSON overrides embedded in the page
pub const SITE_CONFIG_ID: &str = "site-config";
