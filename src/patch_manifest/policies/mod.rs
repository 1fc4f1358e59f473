mod update_scope;

pub use update_scope::UpdateScope;
