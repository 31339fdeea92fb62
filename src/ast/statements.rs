use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{ExprWrapper, Node, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<ExprWrapper>,
    pub span: Span,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// `return <value>;`, where the value may be absent.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<ExprWrapper>,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token_literal(), value),
            None => write!(f, "{};", self.token_literal()),
        }
    }
}

/// An expression evaluated for its effect. The token is the expression's
/// first token.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        ast::{
            ast::{ExprWrapper, Node, Program, StmtWrapper},
            expressions::{Identifier, IntegerLiteral},
        },
        lexer::tokens::{Token, TokenKind},
        Position, Span,
    };

    use super::{LetStmt, ReturnStmt};

    fn token(kind: TokenKind, value: &str) -> Token {
        Token {
            kind,
            value: value.to_string(),
            span: Span::at(Position(0, Rc::new("test.mk".to_string()))),
        }
    }

    #[test]
    fn test_program_display() {
        let program = Program {
            statements: vec![StmtWrapper::new(LetStmt {
                token: token(TokenKind::Let, "let"),
                name: Identifier {
                    token: token(TokenKind::Ident, "myVar"),
                    value: "myVar".to_string(),
                },
                value: Some(ExprWrapper::new(Identifier {
                    token: token(TokenKind::Ident, "anotherVar"),
                    value: "anotherVar".to_string(),
                })),
                span: Span::at(Position::null()),
            })],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_return_display() {
        let with_value = ReturnStmt {
            token: token(TokenKind::Return, "return"),
            value: Some(ExprWrapper::new(IntegerLiteral {
                token: token(TokenKind::Int, "5"),
                value: 5,
            })),
            span: Span::at(Position::null()),
        };
        let bare = ReturnStmt {
            value: None,
            ..with_value.clone()
        };

        assert_eq!(with_value.to_string(), "return 5;");
        assert_eq!(bare.to_string(), "return;");
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();

        assert!(program.is_empty());
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}
