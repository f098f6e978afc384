mod add;
mod leaky_relu;
mod mat_mul;
mod sigmoid;
mod tanh;

pub(crate) use add::Add;
pub(crate) use leaky_relu::LeakyRelu;
pub(crate) use mat_mul::MatMul;
pub(crate) use sigmoid::Sigmoid;
pub(crate) use tanh::Tanh;
