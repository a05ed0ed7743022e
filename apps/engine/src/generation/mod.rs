// Text generation: XYZ bullets, summary templates, and section assembly.
// Every random pick goes through `choice::ChoiceSource`.

pub mod bullet;
pub mod choice;
pub mod sections;
pub mod summary;
pub mod vocabulary;
