use serde::Serialize;

/// Static reference data for one bookable room. Never mutated after startup.
#[derive(Debug, Clone, Serialize)]
pub struct RoomProfile {
    pub name: String,
    pub description: String,
    pub facilities: Vec<String>,
}

impl RoomProfile {
    fn new(name: &str, description: &str, facilities: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            facilities: facilities.iter().map(|f| (*f).to_owned()).collect(),
        }
    }
}

/// Read-only catalog of bookable rooms, seeded at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    rooms: Vec<RoomProfile>,
}

impl Catalog {
    pub fn new(rooms: Vec<RoomProfile>) -> Self {
        Self { rooms }
    }

    /// The six-room catalog this system ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            RoomProfile::new(
                "VIP Room 1",
                "Private room with leather chairs, projector, and AC.",
                &["AC", "Projector", "Mini Bar", "VIP Sofa"],
            ),
            RoomProfile::new(
                "VIP Room 2",
                "Modern VIP room with soundproofing and lounge area.",
                &["AC", "Whiteboard", "Soundproof", "Coffee Machine"],
            ),
            RoomProfile::new(
                "Meeting Room 1",
                "Standard meeting room for 10-12 people.",
                &["AC", "Projector", "Whiteboard"],
            ),
            RoomProfile::new(
                "Meeting Room 2",
                "Cozy meeting room with city view.",
                &["AC", "TV Display", "Flipchart"],
            ),
            RoomProfile::new(
                "Meeting Room 3",
                "Spacious room, suitable for workshops.",
                &["AC", "Whiteboard", "Projector"],
            ),
            RoomProfile::new(
                "Main Meeting Room",
                "Main hall for large meetings up to 30 people.",
                &["AC", "Projector", "Microphone", "Podium"],
            ),
        ])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.iter().any(|r| r.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&RoomProfile> {
        self.rooms.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomProfile> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
