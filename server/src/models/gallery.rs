use serde::Serialize;
use song_service_cli::{Complexity, Pitch, Tempo};

#[derive(Clone, Debug, Serialize)]
pub struct ExampleSong {
    pub id: u32,
    pub recipient_name: &'static str,
    pub hobbies: &'static str,
    pub characteristics: &'static str,
    pub genre: &'static str,
    pub tempo: Tempo,
    pub pitch: Pitch,
    pub complexity: Complexity,
    pub lyrics: &'static str,
    pub audio_url: &'static str,
    pub is_example: bool,
}

pub fn example_songs() -> Vec<ExampleSong> {
    vec![
        ExampleSong {
            id: 1,
            recipient_name: "John",
            hobbies: "Playing guitar, hiking, photography",
            characteristics: "Creative, adventurous, friendly",
            genre: "rock",
            tempo: Tempo::Medium,
            pitch: Pitch::Medium,
            complexity: Complexity::Moderate,
            lyrics: "Happy birthday dear John,
The adventurer with a song in his heart,
With your camera and guitar in hand,
Every day's a brand new start!

Climbing mountains, chasing dreams,
Your spirit wild and free,
Through your lens the world gleams,
What a joy it is to be!",
            audio_url: "https://example.com/rock-example.mp3",
            is_example: true,
        },
        ExampleSong {
            id: 2,
            recipient_name: "Sarah",
            hobbies: "Dancing, painting, gardening",
            characteristics: "Artistic, graceful, nurturing",
            genre: "pop",
            tempo: Tempo::Fast,
            pitch: Pitch::High,
            complexity: Complexity::Complex,
            lyrics: "It's your special day, dear Sarah divine,
Your garden of colors making life so fine,
Dancing through life with grace and flair,
Spreading joy beyond compare!

With every brushstroke, you paint your way,
Making the world brighter day by day,
Your gentle soul helps flowers grow,
Happy birthday to you, you're quite a show!",
            audio_url: "https://example.com/pop-example.mp3",
            is_example: true,
        },
        ExampleSong {
            id: 3,
            recipient_name: "Mike",
            hobbies: "Basketball, cooking, reading",
            characteristics: "Athletic, creative, intellectual",
            genre: "hiphop",
            tempo: Tempo::Fast,
            pitch: Pitch::Low,
            complexity: Complexity::Complex,
            lyrics: "Yo Mike, it's your birthday, time to celebrate,
On the court you're showing skills that are first-rate,
In the kitchen cooking up a storm,
While reading tales that break the norm!

Books and balls, that's how you roll,
Creative mind and athletic soul,
Happy birthday to the MVP,
The coolest chef that we ever see!",
            audio_url: "https://example.com/hiphop-example.mp3",
            is_example: true,
        },
    ]
}
