pub mod books_sea;
