mod graph_basic;
mod layer_linear;
mod optimizer_adam;
