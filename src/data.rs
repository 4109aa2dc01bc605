use comment_form::CommentRecord;

/// Comments the page ships with. Nothing is ever added on the server side.
pub fn seed_comments() -> Vec<(&'static str, CommentRecord)> {
    vec![
        ("arbitraryID0", CommentRecord::new("mistergoomba", "Hooray!")),
        ("arbitraryID1", CommentRecord::new("Meowtin", "Hi, there!")),
        (
            "arbitraryID2",
            CommentRecord::new(
                "Goombalicious",
                "Oh, man I've got lots to say! First of all, I want to say the first thing, \
                 then I'm going to say the second thing.",
            ),
        ),
    ]
}
