//! Example: Render a conditional radios group and drive it

use formkit::{ChoiceSpec, Config, Formkit, GroupSpec};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let forms = Formkit::new(Config::default());
    println!("formkit v{} initialized", formkit::VERSION);

    let spec = GroupSpec::named("contact")
        .with_item(ChoiceSpec::new("email", "Email").with_conditional("<p>We will email you</p>"))
        .with_item(ChoiceSpec::new("phone", "Phone").with_hint("Weekdays only"))
        .with_item(ChoiceSpec::new("post", "Post"));

    println!("{}", forms.render_radios_html(&spec)?);

    let mut group = forms.mount_standalone(&spec)?;
    group.select("contact-1")?;
    println!(
        "checked: {:?}, email panel visible: {}",
        group.checked_value(),
        group.is_panel_visible("conditional-contact-1")?
    );

    group.teardown();
    Ok(())
}
