//! Output formatting utilities

use crate::domain::Entry;

/// Format a list of entries for display
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  {}{}\n",
            entry.created_at.format("%d-%m-%Y"),
            entry.id,
            entry.title,
            attachment_markers(entry)
        ));
    }
    output
}

fn attachment_markers(entry: &Entry) -> String {
    let mut markers = Vec::new();
    if entry.photo.is_some() {
        markers.push("photo");
    }
    if entry.has_voice {
        markers.push("voice");
    }
    if entry.location.is_some() {
        markers.push("located");
    }

    if markers.is_empty() {
        String::new()
    } else {
        format!("  ({})", markers.join(", "))
    }
}

/// Format one entry in full
pub fn format_entry_detail(entry: &Entry) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", entry.title));
    output.push_str(&format!("Id:       {}\n", entry.id));
    output.push_str(&format!("Created:  {}\n", entry.created_at.to_rfc3339()));

    match entry.location {
        Some(point) => {
            output.push_str(&format!(
                "Location: {:.4}°, {:.4}°\n",
                point.lat, point.lon
            ));
        }
        None => output.push_str("Location: none\n"),
    }

    match &entry.photo {
        Some(photo) => output.push_str(&format!("Photo:    {} bytes encoded\n", photo.len())),
        None => output.push_str("Photo:    none\n"),
    }

    output.push_str(&format!(
        "Voice:    {}\n",
        if entry.has_voice { "captured" } else { "none" }
    ));

    if !entry.content.is_empty() {
        output.push_str(&format!("\n{}\n", entry.content));
    }

    output
}
