//! Display and formatting utilities for the rescue shelter.
//!
//! Every line the menu prints is produced here. Functions write to any
//! [`Write`] so the same text goes to stdout in the binary and to a buffer
//! in tests.

use std::io::{self, Write};

use crate::models::Animal;

/// Formats a record as a single display line.
///
/// # Example
///
/// ```
/// use animal_rescue::display::format_animal;
/// use animal_rescue::models::Animal;
///
/// assert_eq!(format_animal(&Animal::new("Rex", "dog", 5)), "Rex (dog) - Priority: 5 🐶");
/// assert_eq!(
///     format_animal(&Animal::new("Nibbles", "hamster", 2)),
///     "Nibbles (hamster) - Priority: 2 Species not recognized"
/// );
/// ```
pub fn format_animal(animal: &Animal) -> String {
    format!(
        "{} ({}) - Priority: {} {}",
        animal.name(),
        animal.species(),
        animal.priority(),
        animal.species().badge()
    )
}

/// Prints the welcome banner shown once per session.
pub fn display_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "=======================|🐾 Animal Rescue Game 🐾|======================="
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "🦸 Welcome to Animal Rescue Adventure - A Tale of Priority and Care! 🦸"
    )
}

/// Prints the seven-option menu and the choice prompt.
pub fn display_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose an action:")?;
    writeln!(out, "[ 1 ] 🐾 Rescue a new animal")?;
    writeln!(out, "[ 2 ] 🕵️‍♀️ Search for an animal")?;
    writeln!(out, "[ 3 ] 📋 View all rescued animals (BST)")?;
    writeln!(out, "[ 4 ] 🏡 Adopt an animal (by name)")?;
    writeln!(out, "[ 5 ] 🐾 View top priority animal (Heap)")?;
    writeln!(out, "[ 6 ] ❤️‍🩹 Adopt a priority animal (remove from Heap)")?;
    writeln!(out, "[ 7 ] ❌ Exit")?;
    write!(out, "Choose an option (1-7): ")?;
    out.flush()
}

/// Prints an input prompt without a trailing newline.
pub fn display_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "✯ {prompt}: ")?;
    out.flush()
}

/// Confirms a rescue.
pub fn display_rescued(out: &mut impl Write, animal: &Animal) -> io::Result<()> {
    writeln!(out, "{} has been rescued!❤️🎉", animal.name())
}

/// Reports a successful name search.
pub fn display_found(out: &mut impl Write, animal: &Animal) -> io::Result<()> {
    writeln!(out, "Found {} in the rescue system!🐾🎉", animal.name())
}

/// Reports a name that is not in the tree.
pub fn display_not_found(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "No animal found with the name {name} 💔")
}

/// Prints every record, one per line, under a heading.
pub fn display_all<'a, I>(out: &mut impl Write, animals: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Animal>,
{
    writeln!(out)?;
    writeln!(out, "📋 All rescued animals:")?;
    for animal in animals {
        writeln!(out, "{}", format_animal(animal))?;
    }
    Ok(())
}

/// Confirms an adoption by name.
pub fn display_adopted(out: &mut impl Write, animal: &Animal) -> io::Result<()> {
    writeln!(
        out,
        "{} has been adopted! Thank you for giving them a loving home! 🏡💞",
        animal.name()
    )
}

/// Shows the current highest-priority record.
pub fn display_top_priority(out: &mut impl Write, animal: &Animal) -> io::Result<()> {
    writeln!(out, "The top priority animal is:  {}", format_animal(animal))
}

/// Reports that there is no top-priority animal to show.
pub fn display_no_top_priority(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "No animals in the priority queue.💔")
}

/// Confirms an adoption by priority.
pub fn display_priority_adopted(out: &mut impl Write, animal: &Animal) -> io::Result<()> {
    writeln!(out, "{} has been adopted due to priority!💖🎉", animal.name())
}

/// Reports that there is no priority animal left to adopt.
pub fn display_queue_empty(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "No animals in the priority queue. 🐾💔")
}

/// Rejects a priority that is not a whole number.
pub fn display_invalid_priority(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "⚠️ '{text}' is not a whole number. Please try again.")
}

/// Rejects an unknown menu choice.
pub fn display_invalid_choice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "⚠️ Invalid choice. Please try again.")
}

/// Prints the farewell line.
pub fn display_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "✨🐾 Thank you for playing the Animal Rescue Game!  Have a pawsome day! 🐾✨"
    )
}
