pub mod distances2;
