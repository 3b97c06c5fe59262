use anyhow::Result;
use colored::*;

use crate::kv::KeyValueStore;
use crate::normalize::MediaKind;
use crate::resolve::ResolutionService;
use crate::vehicle::{Topic, VehicleVariant};

fn kind_label(kind: MediaKind) -> ColoredString {
  match kind {
    MediaKind::DirectMedia => "video file".green(),
    MediaKind::Embed => "embed".blue(),
  }
}

/// Print the selected vehicle, or select a new one
pub fn vehicle<S: KeyValueStore>(
  service: &mut ResolutionService<S>,
  choice: Option<VehicleVariant>,
) -> Result<()> {
  match choice {
    Some(vehicle) => {
      service.select_vehicle(vehicle);
      println!("{} Selected {}", "✓".green(), vehicle.display_name().cyan());
    }
    None => {
      let current = service.selected_vehicle();
      println!("{} ({})", current.display_name().cyan(), current.code());
    }
  }
  Ok(())
}

/// List every topic with the video it currently resolves to
pub fn list_topics<S: KeyValueStore>(service: &ResolutionService<S>, vehicle: VehicleVariant) -> Result<()> {
  println!("{}", vehicle.display_name().bold());
  for topic in Topic::ALL {
    let customized = service.store().get_override(vehicle, topic).is_some();
    let marker = if customized { "*".yellow() } else { " ".normal() };
    let url = service.effective_media(vehicle, topic);
    let shown = if url.is_empty() { "(no video)".dimmed().to_string() } else { url };
    println!("{} {:<11} {:<20} {}", marker, topic.code().cyan(), topic.title(), shown);
  }
  Ok(())
}

/// Show the resolved video for one topic
pub fn show<S: KeyValueStore>(service: &ResolutionService<S>, vehicle: VehicleVariant, topic: Topic) -> Result<()> {
  println!("{} / {}", vehicle.display_name().bold(), topic.title().bold());

  match service.media_view(vehicle, topic) {
    Some(view) => {
      println!("  {} {}", "source:".dimmed(), view.src);
      println!("  {} {}", "render:".dimmed(), kind_label(view.kind));
    }
    None => println!("  {}", "No video for this topic".yellow()),
  }

  let stored = service.stored_media(vehicle, topic);
  if service.store().get_override(vehicle, topic).is_some() {
    println!("  {} {}", "saved:".dimmed(), if stored.is_empty() { "\"\"" } else { stored.as_str() });
  }
  Ok(())
}

/// Save a custom link for one topic
pub fn set<S: KeyValueStore>(
  service: &mut ResolutionService<S>,
  vehicle: VehicleVariant,
  topic: Topic,
  url: &str,
) -> Result<()> {
  service.set_override(vehicle, topic, url.trim());
  let effective = service.effective_media(vehicle, topic);
  if effective.is_empty() {
    println!("{} Cleared video for {}/{}", "✓".green(), vehicle.code().cyan(), topic.code().yellow());
  } else {
    println!("{} Saved video for {}/{}: {}", "✓".green(), vehicle.code().cyan(), topic.code().yellow(), effective);
  }
  Ok(())
}

/// Go back to the recommended video for one topic
pub fn reset<S: KeyValueStore>(service: &mut ResolutionService<S>, vehicle: VehicleVariant, topic: Topic) -> Result<()> {
  service.reset_override(vehicle, topic);
  println!(
    "{} Restored recommended video for {}/{}: {}",
    "✓".green(),
    vehicle.code().cyan(),
    topic.code().yellow(),
    service.effective_media(vehicle, topic)
  );
  Ok(())
}

/// Print the recommended playlist, marking the entry currently in use
pub fn playlist<S: KeyValueStore>(service: &ResolutionService<S>, vehicle: VehicleVariant, topic: Topic) -> Result<()> {
  let current = service.stored_media(vehicle, topic);
  println!("{} / {} - Recommended Playlist", vehicle.display_name().bold(), topic.title().bold());
  for (index, entry) in service.effective_playlist(vehicle, topic).iter().enumerate() {
    let marker = if entry.url == current { "▶".green() } else { " ".normal() };
    println!("{} [{}] {}", marker, index, entry.title.cyan());
    println!("      {}", entry.url.dimmed());
  }
  Ok(())
}

/// Use a playlist entry as the topic's video
pub fn pick<S: KeyValueStore>(
  service: &mut ResolutionService<S>,
  vehicle: VehicleVariant,
  topic: Topic,
  index: usize,
) -> Result<()> {
  let entry = service.pick_playlist_entry(vehicle, topic, index)?;
  println!("{} Now using \"{}\" for {}/{}", "✓".green(), entry.title, vehicle.code().cyan(), topic.code().yellow());
  Ok(())
}
