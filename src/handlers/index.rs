use super::*;

#[derive(Template)]
#[template(path = "home.html")]
struct Home<'a> {
    app: AppTpl,
    comments: Vec<CommentBlock<'a>>,
}

pub async fn get(reg: Data<Registry>, app: AppTpl) -> HttpResponse {
    Home {
        app,
        comments: reg
            .comments
            .iter()
            .map(|(_, record)| CommentBlock::seeded(record))
            .collect(),
    }
    .to_response()
}
