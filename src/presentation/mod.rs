pub mod results_view;
