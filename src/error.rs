use thiserror::Error;

use crate::compose::ComposeError;
use crate::input::InputError;
use crate::markup::MarkupError;
use crate::model::percentile::PercentileError;
use crate::pipeline::stage3_render::RenderError;
use crate::university::UniversityError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Percentile(#[from] PercentileError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Markup(#[from] MarkupError),
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error(transparent)]
    University(#[from] UniversityError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
