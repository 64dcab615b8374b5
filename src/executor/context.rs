use crate::transaction::TransactionStack;

pub struct ExecutionContext<'a> {
    pub transactions: &'a mut TransactionStack,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(transactions: &'a mut TransactionStack) -> Self {
        Self { transactions }
    }
}
