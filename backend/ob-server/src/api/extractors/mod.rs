pub mod authenticated_principal;
