pub mod object_lister_trait;
