mod graphics;
mod tools;
mod view;

pub use view::LessonView;
