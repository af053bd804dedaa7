//! Built-in content used when the document or a section is unavailable

use super::{About, Album, BlogPost, ContactBox, IconPosition, LinkButton, MessageBox, MusicPlayer};

pub fn about() -> About {
    About {
        show_welcome_on_load: true,
        window1: MessageBox {
            title: "Message box".into(),
            message: "This is a short about section for ethan's audio production website. \
                      Who knows what will be written here? It could be long, or short - but not too long."
                .into(),
            welcome_text: "Welcome!".into(),
        },
        window2: ContactBox {
            title: "Contact".into(),
            email: "myemail@email.com".into(),
            contact: "another-contact-field".into(),
            buttons: vec![
                LinkButton {
                    text: "Link here".into(),
                    url: "https://example.com/link1".into(),
                },
                LinkButton {
                    text: "Spotify".into(),
                    url: "https://open.spotify.com/artist/your-artist-id".into(),
                },
            ],
        },
    }
}

pub fn blog() -> Vec<BlogPost> {
    vec![BlogPost {
        title: "First Post".into(),
        body: "This is the body content of the first blog post.".into(),
        year: "2026".into(),
        month: "01".into(),
        date: "11".into(),
        time: "12:00".into(),
    }]
}

fn album(title: &str, display_name: &str, top: &str, right: &str) -> Album {
    Album {
        title: title.into(),
        display_name: display_name.into(),
        icon: "cd.png".into(),
        position: IconPosition {
            top: top.into(),
            right: right.into(),
        },
    }
}

pub fn music_players() -> Vec<MusicPlayer> {
    vec![
        MusicPlayer {
            artist: "Murdock Street".into(),
            albums: vec![
                album("Basement Candy - EP", "Basement-Candy.wav", "15%", "90%"),
                album("Ode to You", "Ode-to-You.wav", "75%", "10%"),
            ],
        },
        MusicPlayer {
            artist: "Lokadonna".into(),
            albums: vec![album(
                "code:GRĖĖN (feat. Prod.eb) - EP",
                "code:GREEN.wav",
                "20%",
                "20%",
            )],
        },
        MusicPlayer {
            artist: "tsunamë".into(),
            albums: vec![album("99 Side A", "99 Side A.wav", "50%", "50%")],
        },
    ]
}
