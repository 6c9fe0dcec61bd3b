use vista_engine::windowing::Identified;

/// One stop of the campus tour.
#[derive(Debug, Clone)]
pub struct Building {
    pub id: u32,
    pub name: String,
    pub category: &'static str,
}

impl Identified for Building {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

const CATEGORIES: [(&str, &[&str]); 5] = [
    (
        "Academic",
        &[
            "Hall of Science",
            "Humanities Block",
            "Engineering Annex",
            "Lecture Theatre",
            "Math Tower",
        ],
    ),
    ("Library", &["Main Library", "Law Library", "Archive Reading Room"]),
    ("Dining", &["North Cafeteria", "Coffee Kiosk", "Food Court"]),
    ("Residence", &["Oak House", "Birch House", "Cedar Court", "Willow Flats"]),
    ("Sports", &["Aquatic Centre", "Field House", "Tennis Courts"]),
];

/// The directory shown by the preview, `copies` times over so the list is
/// long enough to window.
pub fn directory(copies: usize) -> Vec<Building> {
    let mut out = Vec::new();
    for round in 0..copies {
        for (category, names) in CATEGORIES {
            for name in names {
                let id = out.len() as u32;
                let name = match round {
                    0 => (*name).to_string(),
                    _ => format!("{name} {}", round + 1),
                };
                out.push(Building { id, name, category });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dense() {
        let dir = directory(3);
        assert_eq!(dir.len(), 18 * 3);
        assert!(dir.iter().enumerate().all(|(i, b)| b.id == i as u32));
        assert_eq!(dir[18].name, "Hall of Science 2");
    }
}
