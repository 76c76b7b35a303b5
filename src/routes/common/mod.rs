mod respond;

pub use respond::rendered_yaml;
